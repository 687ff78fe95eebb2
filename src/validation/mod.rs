//! # Request Validation Module
//!
//! 요청 세그먼트(body / query / path params)를 선언적 스키마로 검증하고
//! 선언된 타입으로 변환하는 계층입니다.
//!
//! ```text
//! Client ─▶ ValidatedJson / ValidatedQuery / ValidatedPath
//!              │  Schema::validate (coercion + constraints)
//!              ├─ 실패 ─▶ AppError::ValidationError ─▶ 422 envelope
//!              └─ 성공 ─▶ Handler (정규화된 DTO만 전달)
//! ```
//!
//! - [`rule`]: 필드 하나의 타입과 제약 조건
//! - [`schema`]: 규칙 집합과 세그먼트 검증
//! - [`extract`]: actix-web 추출기
//! - [`error`]: 필드 에러와 스키마 정의 오류

pub mod error;
pub mod extract;
pub mod rule;
pub mod schema;

pub use error::{FieldError, SchemaError};
pub use extract::{validate_segment, RequestSchema, ValidatedJson, ValidatedPath, ValidatedQuery};
pub use rule::{CustomCheck, FieldRule, FieldType, Format};
pub use schema::{Refinement, Schema, Segment};
