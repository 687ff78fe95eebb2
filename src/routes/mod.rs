//! 라우트 구성
//!
//! 모든 엔드포인트를 한 곳에서 등록합니다. Spring의 `@RequestMapping` 계층 구조를
//! `web::scope`로 표현합니다. 인증이 필요한 엔드포인트는 핸들러 선언에서
//! `wrap = "AuthMiddleware::..."`로 개별 지정합니다.
//!
//! | 스코프 | 엔드포인트 |
//! |--------|------------|
//! | `/health` | 서비스 상태 |
//! | `/api/v1/openapi.json` | OpenAPI 문서 |
//! | `/api/v1/users` | 회원가입, 목록, 조회, 삭제 |
//! | `/api/v1/auth` | 로그인, 토큰 갱신, 현재 사용자 |

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;
use utoipa::OpenApi;

use crate::core::errors::{AppError, AppResult};
use crate::handlers;
use crate::openapi::ApiDoc;
use crate::response::ApiResponse;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(openapi_json);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::get_current_user),
    );
}

/// JSON 본문 파싱 실패 (문법 오류, Content-Type 누락, 크기 초과)를 400으로 통일
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::BadRequest(format!("Invalid JSON payload: {}", err)).into()
    })
}

/// 매칭되는 라우트가 없을 때
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Route not found".to_string()))
}

#[get("/health")]
async fn health_check(req: HttpRequest) -> HttpResponse {
    ApiResponse::success(
        &req,
        "Service is healthy",
        json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

#[get("/api/v1/openapi.json")]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
