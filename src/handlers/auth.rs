//! # Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 JWT 토큰 갱신, 현재 사용자 조회를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/auth/login` | 로그인, 토큰 쌍 발급 |
//! | `POST` | `/api/v1/auth/refresh` | 리프레시 토큰으로 새 토큰 쌍 발급 |
//! | `GET` | `/api/v1/auth/me` | 현재 로그인한 사용자 (액세스 토큰 필요) |
//!
//! ## 로그인 흐름
//!
//! ```text
//! POST /login ─▶ ValidatedJson<LoginRequest> ─▶ UserService::authenticate
//!             ─▶ TokenService::generate_token_pair ─▶ 200 { user, access_token, refresh_token, ... }
//! ```

use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest};
use crate::domain::dto::users::response::{LoginResponse, TokenResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenType;
use crate::middlewares::AuthMiddleware;
use crate::response::{ApiEnvelope, ApiResponse};
use crate::services::auth::TokenService;
use crate::services::users::UserService;
use crate::validation::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiEnvelope<LoginResponse>),
        (status = 401, description = "Invalid email or password"),
        (status = 422, description = "Validation failed"),
    )
)]
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: ValidatedJson<LoginRequest>,
) -> AppResult<HttpResponse> {
    let user = user_service.authenticate(&payload.email, &payload.password).await?;
    let tokens = token_service.generate_token_pair(&user)?;

    Ok(ApiResponse::success(&req, "Login successful", LoginResponse::new(user, tokens)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed", body = ApiEnvelope<TokenResponse>),
        (status = 401, description = "Invalid or expired refresh token"),
    )
)]
#[post("/refresh")]
pub async fn refresh_tokens(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: ValidatedJson<RefreshTokenRequest>,
) -> AppResult<HttpResponse> {
    let claims = token_service.verify_token(&payload.refresh_token, TokenType::Refresh)?;

    // 토큰 발급 이후 삭제/비활성화된 계정은 갱신 불가
    let user = user_service.find_active_user(&claims.sub).await?;
    let tokens = token_service.generate_token_pair(&user)?;

    log::info!("🔄 토큰 갱신 성공: 사용자 ID {}", claims.sub);
    Ok(ApiResponse::success(&req, "Token refreshed successfully", TokenResponse::from(tokens)))
}

/// 토큰의 클레임이 아니라 저장소의 최신 정보를 돌려줍니다.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = ApiEnvelope<UserResponse>),
        (status = 401, description = "Authentication required"),
    ),
    security(("bearer_auth" = []))
)]
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn get_current_user(
    req: HttpRequest,
    user_service: web::Data<UserService>,
    current: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user = user_service.find_active_user(&current.user_id).await?;

    Ok(ApiResponse::success(&req, "Current user retrieved successfully", UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{bearer, TestContext, TEST_PASSWORD};
    use crate::domain::models::token::TokenType;
    use crate::repositories::users::UserRepository;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_login_returns_tokens_and_user() {
        let ctx = TestContext::new();
        ctx.seed_user("jane@example.com", "jane_doe", false).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": TEST_PASSWORD }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Login successful"));
        assert_eq!(body["data"]["token_type"], json!("Bearer"));
        assert_eq!(body["data"]["user"]["username"], json!("jane_doe"));
        assert!(body["data"]["user"]["last_login_at"].is_string());

        let access_token = body["data"]["access_token"].as_str().unwrap();
        assert!(ctx.token_service.verify_token(access_token, TokenType::Access).is_ok());
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password() {
        let ctx = TestContext::new();
        ctx.seed_user("jane@example.com", "jane_doe", false).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": "Wrong12345" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Invalid email or password"));
        assert_eq!(body["path"], json!("/api/v1/auth/login"));
    }

    #[actix_web::test]
    async fn test_login_validation() {
        let ctx = TestContext::new();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_refresh_issues_new_pair() {
        let ctx = TestContext::new();
        let (_, tokens) = ctx.seed_user("jane@example.com", "jane_doe", false).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({ "refresh_token": tokens.refresh_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["expires_in"], json!(3600));
        assert!(body["data"]["refresh_token"].is_string());
    }

    #[actix_web::test]
    async fn test_refresh_rejects_access_token() {
        let ctx = TestContext::new();
        let (_, tokens) = ctx.seed_user("jane@example.com", "jane_doe", false).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({ "refresh_token": tokens.access_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_for_deleted_user() {
        let ctx = TestContext::new();
        let (user, tokens) = ctx.seed_user("jane@example.com", "jane_doe", false).await;
        ctx.repo.delete(&user.id.unwrap()).await.unwrap();
        let app = test_app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({ "refresh_token": tokens.refresh_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_me() {
        let ctx = TestContext::new();
        let (user, tokens) = ctx.seed_user("jane@example.com", "jane_doe", false).await;
        let app = test_app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(bearer(&tokens.access_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], json!(user.id_string().unwrap()));

        let anonymous = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let resp = test::call_service(&app, anonymous).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Authentication required"));
    }
}
