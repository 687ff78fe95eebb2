//! # 요청 세그먼트 스키마
//!
//! 필드 규칙(`FieldRule`)의 집합으로 요청의 한 부분(body / query / path params)을
//! 검증하고, 선언된 타입으로 변환된 **새 값**을 돌려줍니다.
//!
//! 원본 요청을 직접 수정하지 않습니다. 핸들러는 추출기(`ValidatedJson` 등)가
//! 넘겨주는 변환된 값만 보게 되므로, 영속 계층에 숫자 필드가 문자열로 전달되는
//! 일이 구조적으로 불가능합니다.
//!
//! ## 검증 정책
//!
//! | 상황 | 동작 |
//! |------|------|
//! | 선택 필드 누락 | 출력에서도 누락 (기본값이 있으면 기본값) |
//! | 필수 필드 누락 / `null` | `This field is required` |
//! | 빈 문자열 | 값이 있는 것으로 간주 → 길이 제약 적용 (`empty_as_absent` 예외) |
//! | 스키마에 없는 필드 | 제거 (`allow_unknown()` 스키마는 통과) |
//! | 숫자 범위 | 경계값 포함 |
//! | enum | 대소문자 구분 정확히 일치 |
//! | 정규식 | 값 전체 일치 |
//!
//! 같은 입력과 스키마에 대해서는 항상 같은 결과를 돌려주는 순수 함수입니다.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};

use super::error::{FieldError, SchemaError};
use super::rule::{join_path, FieldRule};

/// 검증 대상이 되는 요청의 한 부분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Body,
    Query,
    Params,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Body => "body",
            Segment::Query => "query",
            Segment::Params => "params",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 여러 필드에 걸친 검증 (예: 비밀번호 확인)
///
/// 모든 필드 검증을 통과한 변환 결과에 대해서만 실행됩니다.
pub type Refinement = fn(&Map<String, Value>) -> Option<FieldError>;

/// 한 세그먼트에 대한 선언적 규칙 집합
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Vec<FieldRule>,
    allow_unknown: bool,
    refinements: Vec<Refinement>,
}

impl Schema {
    /// 규칙 목록으로 스키마를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `SchemaError::DuplicateField` - 같은 이름의 규칙이 두 개 이상인 경우
    /// * `SchemaError::EmptyFieldName` - 이름이 빈 규칙이 있는 경우
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();

        for rule in &rules {
            if rule.name().is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(rule.name()) {
                return Err(SchemaError::DuplicateField(rule.name().to_string()));
            }
        }

        Ok(Self {
            rules,
            allow_unknown: false,
            refinements: Vec::new(),
        })
    }

    /// 스키마에 없는 필드를 그대로 통과시킵니다.
    ///
    /// 파일 필드와 텍스트 필드가 섞여 들어오는 multipart 폼처럼,
    /// 검증하지 않는 필드도 다음 단계로 넘겨야 하는 경우에 사용합니다.
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// 세그먼트 전체 값을 검증합니다.
    ///
    /// 세그먼트 값이 객체가 아니면 세그먼트 이름(`body`, `query`, `params`)을
    /// 경로로 하는 에러 하나를 돌려줍니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Map)` - 변환이 끝난 새 객체
    /// * `Err(Vec<FieldError>)` - 위반된 모든 제약 조건의 평탄한 목록
    pub fn validate(&self, segment: Segment, input: &Value) -> Result<Map<String, Value>, Vec<FieldError>> {
        let Value::Object(map) = input else {
            return Err(vec![FieldError::new(segment.as_str(), "Expected an object")]);
        };

        let mut errors = Vec::new();
        let output = self.validate_at("", map, &mut errors);

        if errors.is_empty() {
            Ok(output)
        } else {
            Err(errors)
        }
    }

    /// `prefix` 경로 아래에서 객체 하나를 검증합니다. 중첩 객체 규칙에서도 사용됩니다.
    pub(crate) fn validate_at(
        &self,
        prefix: &str,
        input: &Map<String, Value>,
        errors: &mut Vec<FieldError>,
    ) -> Map<String, Value> {
        let before = errors.len();
        let mut output = Map::new();

        for rule in &self.rules {
            let path = join_path(prefix, rule.name());
            if let Some(value) = rule.check(&path, input.get(rule.name()), errors) {
                output.insert(rule.name().to_string(), value);
            }
        }

        if self.allow_unknown {
            for (key, value) in input {
                if !output.contains_key(key) && !self.rules.iter().any(|r| r.name() == key) {
                    output.insert(key.clone(), value.clone());
                }
            }
        }

        if errors.len() == before {
            for refinement in &self.refinements {
                if let Some(mut error) = refinement(&output) {
                    error.field = join_path(prefix, &error.field);
                    errors.push(error);
                }
            }
        }

        output
    }
}
