//! 검증 실패 레코드와 스키마 정의 오류

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 필드 하나에서 발생한 검증 실패
///
/// `field`는 중첩 구조를 점(`.`)으로 이어 붙인 경로입니다.
/// 예: `profile.website`, `tags.0`
///
/// ```json
/// { "field": "email", "message": "Invalid email format" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// 점 표기법 필드 경로
    pub field: String,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 스키마 정의 자체가 잘못된 경우의 오류
///
/// 요청 데이터와는 무관하며, 스키마를 구성하는 시점(애플리케이션 시작 시)에만 발생합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// 같은 이름의 필드 규칙이 두 번 선언됨
    #[error("Duplicate field rule: {0}")]
    DuplicateField(String),

    /// 빈 필드 이름
    #[error("Field rule name must not be empty")]
    EmptyFieldName,

    /// 정규식 컴파일 실패
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl From<regex::Error> for SchemaError {
    fn from(error: regex::Error) -> Self {
        SchemaError::InvalidPattern(error.to_string())
    }
}
