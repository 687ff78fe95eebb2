//! # 애플리케이션 조립
//!
//! 서비스, 미들웨어, 라우트를 하나의 `App`으로 묶습니다.
//! `main`의 `HttpServer`와 통합 테스트가 같은 함수를 사용합니다.
//!
//! 미들웨어는 아래에서 위로 감싸므로 요청은 다음 순서로 지나갑니다.
//!
//! ```text
//! ErrorEnvelope ─▶ Logger ─▶ NormalizePath ─▶ CORS ─▶ Governor ─▶ 라우트
//! ```
//!
//! `ErrorEnvelope`가 가장 바깥이라 Rate Limit, CORS 거절까지 공통 실패 래퍼로 나갑니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{middleware, web, App, Error};

use crate::middlewares::ErrorEnvelope;
use crate::routes::{configure_all_routes, json_config, not_found};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// IP 단위 Rate Limit 설정 (`x-ratelimit-*` 헤더 포함)
pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// 워커마다 `App`을 만들 때 공유하는 값들
#[derive(Clone)]
pub struct AppState {
    pub user_service: web::Data<UserService>,
    pub token_service: web::Data<TokenService>,
    pub rate_limit: RateLimit,
    pub allowed_origins: Arc<[String]>,
}

pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(json_config())
        .app_data(state.user_service)
        .app_data(state.token_service)
        .wrap(Governor::new(&state.rate_limit))
        .wrap(configure_cors(&state.allowed_origins))
        .wrap(middleware::NormalizePath::trim())
        .wrap(middleware::Logger::default())
        .wrap(ErrorEnvelope)
        .configure(configure_all_routes)
        .default_service(web::to(not_found))
}

/// 프론트엔드 Origin만 허용하는 CORS 설정
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
