//! User HTTP handlers.
//!
//! ```text
//! POST /api/v1/users
//! GET  /api/v1/users
//! GET  /api/v1/users/{id}
//! PUT  /api/v1/users/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{AttributeMap, NewUser, User, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema, UserUpdateSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{decode_patch, not_found, parse_path_id};

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Given name.
    #[schema(example = "Ada")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Lovelace")]
    pub last_name: String,
    /// Contact email.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Grants administrative rights; defaults to false.
    #[serde(default)]
    pub is_admin: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            is_admin: value.is_admin,
        }
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid input or email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.facade.create_user(payload.into_inner().into())?;
    Ok(HttpResponse::Created().json(user))
}

/// List users in registration order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses((status = 200, description = "Users", body = [UserSchema])),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<User>> {
    web::Json(state.facade.get_all_users())
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_path_id(&path, "User")?;
    let user = state.facade.get_user(id).ok_or_else(|| not_found("User"))?;
    Ok(web::Json(user))
}

/// Partially update a user. Unknown and server-managed keys are ignored.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserUpdateSchema,
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Invalid input", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AttributeMap>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_path_id(&path, "User")?;
    let patch: UserPatch = decode_patch(&payload)?;
    let user = state
        .facade
        .update_user(id, patch)?
        .ok_or_else(|| not_found("User"))?;
    Ok(web::Json(user))
}
