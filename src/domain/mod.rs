//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 문서 (User)
//! ├── DTOs      - 요청/응답 계약과 요청 검증 스키마
//! └── Models    - JWT 클레임, 인증된 사용자
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Valid` | `RequestSchema` | 데이터 유효성 검사 |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
