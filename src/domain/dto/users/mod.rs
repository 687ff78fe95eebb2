//! # User Data Transfer Objects Module
//!
//! 사용자/인증 API의 요청과 응답 구조입니다.
//!
//! | Spring Security | 이 시스템 | 역할 |
//! |-----------------|-----------|------|
//! | `@RequestBody CreateUserDto` | `CreateUserRequest` | 회원가입 요청 |
//! | `@ResponseBody UserDto` | `UserResponse` | 사용자 정보 응답 |
//! | `JwtAuthenticationToken` | `LoginResponse` | 인증 토큰 응답 |
//!
//! ## 검증 규칙
//!
//! - **이메일**: 이메일 형식
//! - **사용자명**: 3-30자, 영문/숫자/언더스코어만 허용
//! - **표시이름**: 1-50자
//! - **비밀번호**: 최소 8자, 대소문자+숫자 포함
//! - **비밀번호 확인**: 원본 비밀번호와 일치
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "email": "user@example.com",
//!   "username": "john_doe",
//!   "display_name": "John Doe",
//!   "is_active": true,
//!   "roles": ["user"],
//!   "last_login_at": null,
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "updated_at": "2024-01-15T10:30:00Z"
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
