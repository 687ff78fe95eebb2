//! OpenAPI 문서
//!
//! 핸들러의 `#[utoipa::path]`와 DTO의 `ToSchema`를 모아 하나의 문서로 만듭니다.
//! `GET /api/v1/openapi.json`에서 제공합니다.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Bearer 액세스 토큰 인증 방식 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("`POST /api/v1/auth/login`으로 받은 access_token"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        description = "Blog platform REST API. Every response body uses the common envelope: \
                       `success`, `message`, `data`, `pagination`, `errors`, `timestamp`, `path`."
    ),
    paths(
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::delete_user,
        crate::handlers::auth::login,
        crate::handlers::auth::refresh_tokens,
        crate::handlers::auth::get_current_user,
    ),
    components(
        schemas(
            crate::validation::FieldError,
            crate::response::PaginationMeta,
            crate::domain::dto::users::request::CreateUserRequest,
            crate::domain::dto::users::request::ListUsersQuery,
            crate::domain::dto::users::request::LoginRequest,
            crate::domain::dto::users::request::RefreshTokenRequest,
            crate::domain::dto::users::response::UserResponse,
            crate::domain::dto::users::response::TokenResponse,
            crate::domain::dto::users::response::LoginResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "User accounts"),
        (name = "auth", description = "Email and password authentication"),
    )
)]
pub struct ApiDoc;
