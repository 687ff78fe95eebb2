//! 인증 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰의 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - `token_type` 클레임으로 액세스/리프레시 토큰 구분
//! - 토큰 만료 시간 관리

pub mod token_service;

pub use token_service::TokenService;
