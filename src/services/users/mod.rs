//! 사용자 관리 서비스 모듈
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일/사용자명 중복 방지
//! - 로그인 실패 메시지 통일
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let created = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
