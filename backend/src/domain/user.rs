//! User records and the rules guarding their fields.

use std::sync::OnceLock;

use regex::Regex;

use super::RecordId;

/// Rule violations raised while validating user input.
///
/// The messages are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Name missing or empty.
    #[error("用户名不能为空")]
    EmptyName,
    /// Email missing or empty.
    #[error("邮箱不能为空")]
    EmptyEmail,
    /// Email without the `local@domain.tld` shape.
    #[error("邮箱格式不正确")]
    MalformedEmail,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn check_email(email: &str) -> Result<(), UserValidationError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(UserValidationError::MalformedEmail)
    }
}

/// Stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: RecordId,
    name: String,
    email: String,
}

impl User {
    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch { name, email } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
    }
}

/// Unvalidated create request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

/// User fields that passed validation and await an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate a draft: name and email are required and the email must be
    /// well formed.
    ///
    /// # Errors
    /// Returns the first [`UserValidationError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use rich_backend::domain::{NewUser, UserDraft, UserValidationError};
    ///
    /// let draft = UserDraft { name: "Ada".into(), email: "ada@example.com".into() };
    /// assert!(NewUser::try_from_draft(draft).is_ok());
    ///
    /// let draft = UserDraft { name: "Ada".into(), email: String::new() };
    /// assert_eq!(NewUser::try_from_draft(draft), Err(UserValidationError::EmptyEmail));
    /// ```
    pub fn try_from_draft(draft: UserDraft) -> Result<Self, UserValidationError> {
        let UserDraft { name, email } = draft;
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        check_email(&email)?;
        Ok(Self { name, email })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Materialise the stored record under `id`.
    #[must_use]
    pub fn with_id(self, id: RecordId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

impl TryFrom<UserDraft> for NewUser {
    type Error = UserValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(draft)
    }
}

/// Unvalidated update request; absent and empty fields mean "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<String>,
}

impl UserPatch {
    /// Drop empty strings and check any supplied email.
    ///
    /// # Errors
    /// Returns [`UserValidationError::MalformedEmail`] for a non-empty,
    /// badly formed email.
    pub fn try_from_changes(changes: UserChanges) -> Result<Self, UserValidationError> {
        let name = changes.name.filter(|name| !name.is_empty());
        let email = changes.email.filter(|email| !email.is_empty());
        if let Some(email) = email.as_deref() {
            check_email(email)?;
        }
        Ok(Self { name, email })
    }

    /// True when applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl TryFrom<UserChanges> for UserPatch {
    type Error = UserValidationError;

    fn try_from(changes: UserChanges) -> Result<Self, Self::Error> {
        Self::try_from_changes(changes)
    }
}
