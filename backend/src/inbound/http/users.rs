//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users {"name":"Ada","email":"ada@example.com"}
//! PUT    /api/v1/users/{id} {"email":"ada@lovelace.dev"}
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{RequestContext, User, UserChanges, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{EmptyEnvelope, UserEnvelope, UserListEnvelope};
use crate::inbound::http::state::HttpState;

/// User as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// Request body for `POST /api/v1/users`.
///
/// Missing or `null` fields decode as empty strings so the domain rules, not
/// the decoder, report them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/v1/users/{id}`; omitted fields are kept.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use rich_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = UserListEnvelope),
        (status = 500, description = "Internal server error", body = EmptyEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<UserResponse>>>> {
    let users = state.users.list(&RequestContext::current()).await?;
    let data = users.into_iter().map(UserResponse::from).collect();
    Ok(web::Json(Envelope::ok(data)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Decimal user identifier")),
    responses(
        (status = 200, description = "User", body = UserEnvelope),
        (status = 404, description = "Unknown or malformed id (2001/2003)", body = EmptyEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Envelope<UserResponse>>> {
    let user = state.users.get(&RequestContext::current(), &id).await?;
    Ok(web::Json(Envelope::ok(user.into())))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created, or rule violation (code 1001)", body = UserEnvelope),
        (status = 400, description = "Malformed body", body = EmptyEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<Envelope<UserResponse>>> {
    let draft = UserDraft::from(payload.into_inner());
    let user = state.users.create(&RequestContext::current(), draft).await?;
    Ok(web::Json(Envelope::ok_with_message("用户创建成功", user.into())))
}

/// Merge changes into a user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Decimal user identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated, or rule violation (code 1001)", body = UserEnvelope),
        (status = 400, description = "Malformed body", body = EmptyEnvelope),
        (status = 404, description = "Unknown or malformed id (2001/2003)", body = EmptyEnvelope)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<Envelope<UserResponse>>> {
    let changes = UserChanges::from(payload.into_inner());
    let user = state
        .users
        .update(&RequestContext::current(), &id, changes)
        .await?;
    Ok(web::Json(Envelope::ok_with_message("用户更新成功", user.into())))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "Decimal user identifier")),
    responses(
        (status = 200, description = "Deleted", body = EmptyEnvelope),
        (status = 404, description = "Unknown or malformed id (2001/2003)", body = EmptyEnvelope)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Envelope<()>>> {
    state.users.delete(&RequestContext::current(), &id).await?;
    Ok(web::Json(Envelope::ok_empty("用户删除成功")))
}
