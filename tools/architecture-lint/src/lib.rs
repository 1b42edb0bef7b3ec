//! Repo-local architectural lint for enforcing hexagonal boundaries.
//!
//! The backend splits into `domain` (entities, services and ports), `inbound`
//! (HTTP adapter) and `outbound` (storage adapters). This crate provides a
//! lightweight lint that:
//!
//! - forbids `domain` code from depending on adapter modules (`inbound`,
//!   `outbound`) or on the web and OpenAPI crates
//! - forbids `inbound` adapters from importing `outbound` modules and, outside
//!   test code, from naming storage-level types such as `StorageError` or the
//!   repository ports
//! - forbids `outbound` adapters from importing `inbound` modules or the web
//!   crates
//!
//! The lint runs via `cargo run -p architecture-lint [BACKEND_DIR]`.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::Visit;

/// Directory holding the backend crate, relative to the workspace root.
pub const BACKEND_DIR: &str = "backend";

/// Source directories under `backend/src` that the lint inspects.
pub const LINTED_LAYERS: [&str; 3] = ["domain", "inbound", "outbound"];

/// Name under which the backend library is imported by its binaries.
const BACKEND_CRATE: &str = "rich_backend";

const WEB_CRATES: [&str; 4] = ["actix", "actix_service", "actix_web", "awc"];
const DOC_CRATES: [&str; 2] = ["utoipa", "utoipa_swagger_ui"];

/// Storage-level identifiers the HTTP adapter must never mention.
const STORAGE_NAMES: [&str; 3] = ["StorageError", "UserRepository", "CouponRepository"];

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    Io(io::Error),
    /// Rust source parsing failed.
    Parse { file: PathBuf, message: String },
    /// One or more boundary violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error while linting architecture: {err}"),
            Self::Parse { file, message } => write!(
                f,
                "Failed to parse Rust source while linting architecture ({}): {message}",
                file.display()
            ),
            Self::Violations(violations) => {
                writeln!(f, "Architecture boundary violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArchitectureLintError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Outcome of a clean lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintSummary {
    /// Number of source files inspected.
    pub files: usize,
}

impl fmt::Display for LintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "architecture lint passed: {} files across {}",
            self.files,
            LINTED_LAYERS.join(", ")
        )
    }
}

/// Lint the backend crate sources on disk.
///
/// `backend_dir` must be the [`BACKEND_DIR`] directory at the repository
/// root.
pub fn lint_backend_sources(backend_dir: &Path) -> Result<LintSummary, ArchitectureLintError> {
    let src_dir = backend_dir.join("src");
    let sources = collect_lint_sources(&src_dir)?;
    lint_sources(&sources)?;
    Ok(LintSummary {
        files: sources.len(),
    })
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer = ModuleLayer::infer_from_path(&source.file).ok_or_else(|| {
            ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "unable to infer module layer from file path".to_owned(),
            }
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(lint_parsed_source(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: PathBuf,
    pub contents: String,
}

/// The architectural "layer" inferred from a file path under `backend/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleLayer {
    Domain,
    Inbound,
    Outbound,
}

impl ModuleLayer {
    fn infer_from_path(relative_path: &Path) -> Option<Self> {
        let first = relative_path
            .components()
            .next()?
            .as_os_str()
            .to_string_lossy();
        match first.as_ref() {
            "domain" => Some(Self::Domain),
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn forbidden_module_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => BTreeSet::from(["inbound", "outbound"]),
            Self::Inbound => BTreeSet::from(["outbound"]),
            Self::Outbound => BTreeSet::from(["inbound"]),
        }
    }

    fn forbidden_crate_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => WEB_CRATES.into_iter().chain(DOC_CRATES).collect(),
            Self::Inbound => BTreeSet::new(),
            Self::Outbound => WEB_CRATES.into_iter().chain(DOC_CRATES).collect(),
        }
    }

    fn forbidden_names(self) -> BTreeSet<&'static str> {
        match self {
            Self::Inbound => STORAGE_NAMES.into_iter().collect(),
            Self::Domain | Self::Outbound => BTreeSet::new(),
        }
    }
}

/// True for files compiled only under `cfg(test)` by naming convention.
fn is_test_file(file: &Path) -> bool {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem == "tests" || stem == "test_utils" || stem.ends_with("_tests"))
}

fn lint_parsed_source(file: &Path, layer: ModuleLayer, parsed: &syn::File) -> Vec<Violation> {
    let forbidden_modules = layer.forbidden_module_roots();
    let forbidden_crates = layer.forbidden_crate_roots();
    let forbidden_names = layer.forbidden_names();
    let layer_name = layer.name();

    let mut collector = PathCollector::default();
    collector.visit_file(parsed);
    let test_file = is_test_file(file);

    let mut messages = BTreeSet::new();
    for (segments, in_test) in collector.all_paths() {
        if let Some(root) = forbidden_internal_module_root(segments, &forbidden_modules) {
            messages.insert(format!(
                "{layer_name} module must not depend on crate::{root}"
            ));
        }

        if let Some(root) = forbidden_external_crate_root(segments, &forbidden_crates) {
            messages.insert(format!(
                "{layer_name} module must not depend on external crate `{root}`"
            ));
        }

        if test_file || in_test {
            continue;
        }
        if let Some(name) = forbidden_name(segments, &forbidden_names) {
            messages.insert(format!(
                "{layer_name} module must not name storage type `{name}`"
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn forbidden_internal_module_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = internal_module_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn forbidden_external_crate_root(
    segments: &[String],
    forbidden_roots: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    let root = external_crate_root(segments)?;
    forbidden_roots.get(root).copied()
}

fn forbidden_name(
    segments: &[String],
    forbidden: &BTreeSet<&'static str>,
) -> Option<&'static str> {
    segments
        .iter()
        .find_map(|segment| forbidden.get(segment.as_str()).copied())
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn internal_module_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if matches!(first, "domain" | "inbound" | "outbound") {
        return Some(first);
    }
    let start_index = match first {
        "crate" | "self" | "super" => segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?,
        BACKEND_CRATE => 1,
        _ => return None,
    };
    segments.get(start_index).map(|segment| segment.as_str())
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) || root == BACKEND_CRATE {
        return None;
    }
    Some(root)
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Path>()
                .is_ok_and(|path| path.is_ident("test"))
    })
}

/// Gathers every path mentioned in a file, split by whether it sits inside
/// a `#[cfg(test)]` item.
#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
    test_paths: BTreeSet<Vec<String>>,
    test_depth: usize,
}

impl PathCollector {
    fn all_paths(&self) -> impl Iterator<Item = (&Vec<String>, bool)> {
        self.paths
            .iter()
            .map(|path| (path, false))
            .chain(self.test_paths.iter().map(|path| (path, true)))
    }

    fn insert(&mut self, segments: Vec<String>) {
        if segments.is_empty() {
            return;
        }
        if self.test_depth > 0 {
            self.test_paths.insert(segments);
        } else {
            self.paths.insert(segments);
        }
    }

    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        self.insert(segments);
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                let mut next = prefix;
                next.push(path.ident.to_string());
                self.record_use_tree(&path.tree, next);
            }
            syn::UseTree::Name(name) => {
                let mut segments = prefix;
                segments.push(name.ident.to_string());
                self.insert(segments);
            }
            syn::UseTree::Rename(rename) => {
                let mut segments = prefix;
                segments.push(rename.ident.to_string());
                self.insert(segments);
            }
            syn::UseTree::Glob(_) => {
                let mut segments = prefix;
                segments.push("*".to_owned());
                self.insert(segments);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }

    fn scoped(&mut self, test_only: bool, visit: impl FnOnce(&mut Self)) {
        if test_only {
            self.test_depth += 1;
        }
        visit(self);
        if test_only {
            self.test_depth -= 1;
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.scoped(is_cfg_test(&node.attrs), |this| {
            this.record_use_tree(&node.tree, Vec::new());
        });
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        self.scoped(is_cfg_test(&node.attrs), |this| {
            syn::visit::visit_item_mod(this, node);
        });
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.scoped(is_cfg_test(&node.attrs), |this| {
            syn::visit::visit_item_fn(this, node);
        });
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        self.scoped(is_cfg_test(&node.attrs), |this| {
            syn::visit::visit_item_impl(this, node);
        });
    }
}

fn collect_lint_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut sources = Vec::new();
    for layer_dir in LINTED_LAYERS {
        let dir = src_dir.join(layer_dir);
        if !dir.exists() {
            continue;
        }
        collect_sources_under(src_dir, &dir, &mut sources)?;
    }
    sources.sort_by(|left, right| left.file.cmp(&right.file));
    Ok(sources)
}

fn collect_sources_under(
    src_root: &Path,
    current: &Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    for entry in fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_sources_under(src_root, &path, sources)?;
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }

        let relative = path
            .strip_prefix(src_root)
            .map_err(|err| ArchitectureLintError::Parse {
                file: path.clone(),
                message: err.to_string(),
            })?
            .to_path_buf();
        let contents = fs::read_to_string(&path)?;
        sources.push(LintSource {
            file: relative,
            contents,
        });
    }
    Ok(())
}
