//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 직접 생성해 `web::Data`로 등록하고,
//! 핸들러는 추출자로 주입받습니다.
//!
//! ```rust,ignore
//! async fn handler(user_service: web::Data<UserService>) -> AppResult<HttpResponse> { ... }
//! ```

pub mod auth;
pub mod users;
