//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체입니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB에 저장되는 문서, 고유 ID를 가짐
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 (JWT 클레임, 인증된 사용자)
//!
//! ```text
//! models/
//! ├── auth/    ← 인증된 사용자, 인증 모드/역할 요구사항
//! └── token/   ← JWT 클레임, 토큰 쌍
//! ```

pub mod auth;
pub mod token;
