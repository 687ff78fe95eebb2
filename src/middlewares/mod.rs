//! 미들웨어 모듈
//!
//! Spring Boot의 Filter와 Interceptor에 해당하는 횡단 관심사를 처리합니다.
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드, 역할 검사
//!
//! ### 2. 에러 래핑 미들웨어 (ErrorEnvelope)
//! - 모든 에러 응답을 공통 실패 래퍼로 변환
//! - 가장 바깥에 등록
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(Logger::default())
//!     .wrap(ErrorEnvelope)
//!     .service(
//!         web::scope("/api/v1/auth")
//!             .service(login)
//!             .service(web::scope("").wrap(AuthMiddleware::required()).service(me))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod error_envelope;
mod error_envelope_inner;

pub use auth_middleware::AuthMiddleware;
pub use error_envelope::ErrorEnvelope;
