//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 권한 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 공개 | 201 Created |
//! | `GET` | `/api/v1/users` | 관리자 | 200 OK (페이지네이션) |
//! | `GET` | `/api/v1/users/{user_id}` | 로그인 사용자 | 200 OK |
//! | `DELETE` | `/api/v1/users/{user_id}` | 관리자 | 204 No Content |
//!
//! ### Spring Boot Controller와 비교
//! ```java
//! @PostMapping
//! public ResponseEntity<ApiResponse<UserResponse>> createUser(@Valid @RequestBody CreateUserRequest request) {
//!     return ResponseEntity.status(HttpStatus.CREATED)
//!         .body(ApiResponse.success("User created successfully", userService.createUser(request)));
//! }
//! ```

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::{CreateUserRequest, ListUsersQuery, UserIdPath};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::ROLE_ADMIN;
use crate::middlewares::AuthMiddleware;
use crate::response::{ApiEnvelope, ApiResponse};
use crate::services::users::UserService;
use crate::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};

/// 회원가입
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiEnvelope<UserResponse>),
        (status = 409, description = "Email or username already in use"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("")]
pub async fn create_user(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    payload: ValidatedJson<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = user_service.create_user(payload.into_inner()).await?;

    Ok(ApiResponse::created(&req, "User created successfully", user))
}

/// 사용자 목록 (관리자)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Paginated users", body = ApiEnvelope<Vec<UserResponse>>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Insufficient permissions"),
        (status = 422, description = "Validation failed"),
    ),
    security(("bearer_auth" = []))
)]
#[get("", wrap = "AuthMiddleware::required_with_role(ROLE_ADMIN)")]
pub async fn list_users(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    query: ValidatedQuery<ListUsersQuery>,
) -> AppResult<HttpResponse> {
    let (users, total) = user_service.list_users(&query).await?;

    Ok(ApiResponse::paginated(
        &req,
        "Users retrieved successfully",
        users,
        total,
        query.page,
        query.limit,
    ))
}

/// 사용자 조회
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(UserIdPath),
    responses(
        (status = 200, description = "User found", body = ApiEnvelope<UserResponse>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid user id"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn get_user(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    path: ValidatedPath<UserIdPath>,
) -> AppResult<HttpResponse> {
    let user = user_service.get_user(&path.user_id).await?;

    Ok(ApiResponse::success(&req, "User retrieved successfully", user))
}

/// 사용자 삭제 (관리자)
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(UserIdPath),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Insufficient permissions"),
        (status = 404, description = "User not found"),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/{user_id}", wrap = "AuthMiddleware::required_with_role(ROLE_ADMIN)")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: ValidatedPath<UserIdPath>,
) -> AppResult<HttpResponse> {
    user_service.delete_user(&path.user_id).await?;

    Ok(ApiResponse::no_content())
}
