//! # 필드 검증 규칙
//!
//! 하나의 필드가 가져야 할 타입과 제약 조건을 선언적으로 표현합니다.
//! validator 크레이트의 `#[validate(...)]` 어트리뷰트가 컴파일 타임에 하던 일을
//! 런타임 값(`serde_json::Value`)에 대해 수행하며, 쿼리 문자열처럼 모든 값이
//! 문자열로 들어오는 경우 선언된 타입으로 변환(coercion)까지 담당합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use blog_api_backend::validation::{FieldRule, Format};
//!
//! let email = FieldRule::string("email").required().format(Format::Email);
//! let page = FieldRule::integer("page").min(1.0).default_value(1);
//! ```

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;
use validator::{ValidateEmail, ValidateUrl};

use super::error::FieldError;
use super::schema::Schema;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";

/// 필드에 선언할 수 있는 기본 타입
#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    /// 중첩 객체. 하위 필드는 내부 스키마로 검증됩니다.
    Object(Schema),
    /// 배열. 각 원소는 주어진 규칙으로 검증됩니다 (규칙의 이름은 무시).
    Array(Box<FieldRule>),
    /// 타입 검사 없이 값을 그대로 통과시킴
    Any,
}

/// 잘 알려진 문자열 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
    Uuid,
}

impl Format {
    fn matches(&self, value: &str) -> bool {
        match self {
            Format::Email => value.validate_email(),
            Format::Url => value.validate_url(),
            Format::Uuid => Uuid::parse_str(value).is_ok(),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Format::Email => "Invalid email format",
            Format::Url => "Invalid URL format",
            Format::Uuid => "Invalid UUID format",
        }
    }
}

/// 필드 단위 사용자 정의 검사. 실패 시 메시지를 돌려줍니다.
pub type CustomCheck = fn(&Value) -> Option<String>;

/// 하나의 필드에 대한 검증 규칙
///
/// 빌더 메서드를 체이닝해서 구성하며, 한 번 만들어진 규칙은 불변입니다.
/// 스키마는 애플리케이션 시작 시 한 번만 만들어지고 요청마다 재구성되지 않습니다.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    field_type: FieldType,
    required: bool,
    default: Option<Value>,
    empty_as_absent: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    one_of: Option<Vec<String>>,
    pattern: Option<Regex>,
    format: Option<Format>,
    message: Option<String>,
    custom: Option<CustomCheck>,
}

impl FieldRule {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            default: None,
            empty_as_absent: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            one_of: None,
            pattern: None,
            format: None,
            message: None,
            custom: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    pub fn object(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(name, FieldType::Object(schema))
    }

    pub fn array(name: impl Into<String>, item: FieldRule) -> Self {
        Self::new(name, FieldType::Array(Box::new(item)))
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Any)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 값이 없을 때 사용할 기본값. 기본값은 제약 조건 검사를 거치지 않습니다.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// 빈 문자열을 "값 없음"으로 취급합니다.
    ///
    /// 기본 동작은 빈 문자열도 값이 있는 것으로 보고 길이 제약을 적용하는 것입니다.
    /// 검색어처럼 `?search=` 형태로 비워서 보내는 쿼리 파라미터에 사용합니다.
    pub fn empty_as_absent(mut self) -> Self {
        self.empty_as_absent = true;
        self
    }

    /// 문자열은 문자 수, 배열은 원소 수 기준
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    /// 포함 하한
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// 포함 상한
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// 허용 값 목록 (대소문자 구분, 정확히 일치)
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.one_of = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// 값 전체가 정규식과 일치해야 합니다. 부분 일치는 실패로 처리됩니다.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        let anchored = Regex::new(&format!(r"\A(?:{})\z", pattern.as_str())).unwrap_or(pattern);
        self.pattern = Some(anchored);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// 제약 조건 위반 메시지를 덮어씁니다. 타입 오류와 필수값 누락 메시지는 그대로입니다.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn custom(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// 원시 값 하나를 검증하고 변환된 값을 돌려줍니다.
    ///
    /// - `Some(value)`: 출력에 포함할 값
    /// - `None`: 값이 없거나(선택 필드) 검증에 실패함. 실패 내역은 `errors`에 쌓입니다.
    pub(crate) fn check(
        &self,
        path: &str,
        raw: Option<&Value>,
        errors: &mut Vec<FieldError>,
    ) -> Option<Value> {
        let raw = raw.filter(|value| !self.is_absent(value));

        let Some(raw) = raw else {
            if let Some(default) = &self.default {
                return Some(default.clone());
            }
            if self.required {
                errors.push(FieldError::new(path, REQUIRED_MESSAGE));
            }
            return None;
        };

        let before = errors.len();

        let value = match self.coerce(path, raw, errors) {
            Ok(value) => value,
            Err(message) => {
                errors.push(FieldError::new(path, message));
                return None;
            }
        };

        for message in self.constraint_violations(&value) {
            errors.push(FieldError::new(path, message));
        }

        (errors.len() == before).then_some(value)
    }

    fn is_absent(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) if s.is_empty() => self.empty_as_absent,
            _ => false,
        }
    }

    /// 선언된 타입으로 변환합니다. 중첩 객체/배열의 하위 오류는 `errors`에 직접 기록됩니다.
    fn coerce(
        &self,
        path: &str,
        raw: &Value,
        errors: &mut Vec<FieldError>,
    ) -> Result<Value, String> {
        match &self.field_type {
            FieldType::String => match raw {
                Value::String(_) => Ok(raw.clone()),
                _ => Err("Expected string".to_string()),
            },
            FieldType::Integer => coerce_integer(raw).ok_or_else(|| "Expected integer".to_string()),
            FieldType::Number => coerce_number(raw).ok_or_else(|| "Expected number".to_string()),
            FieldType::Boolean => coerce_boolean(raw).ok_or_else(|| "Expected boolean".to_string()),
            FieldType::Object(schema) => match raw {
                Value::Object(map) => Ok(Value::Object(schema.validate_at(path, map, errors))),
                _ => Err("Expected object".to_string()),
            },
            FieldType::Array(item) => {
                let items: Vec<&Value> = match raw {
                    Value::Array(items) => items.iter().collect(),
                    Value::Object(_) => return Err("Expected array".to_string()),
                    scalar => vec![scalar],
                };

                // 실패한 원소는 Null 자리표시자로 남겨 길이 제약이 원래 개수로 검사되게 함
                let coerced: Vec<Value> = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| {
                        item.check(&join_path(path, &index.to_string()), Some(value), errors)
                            .unwrap_or(Value::Null)
                    })
                    .collect();

                Ok(Value::Array(coerced))
            }
            FieldType::Any => Ok(raw.clone()),
        }
    }

    fn constraint_violations(&self, value: &Value) -> Vec<String> {
        let mut violations = Vec::new();

        match value {
            Value::String(s) => {
                let length = s.chars().count();
                if let Some(min) = self.min_length {
                    if length < min {
                        violations.push(format!("Must be at least {} characters", min));
                    }
                }
                if let Some(max) = self.max_length {
                    if length > max {
                        violations.push(format!("Must be at most {} characters", max));
                    }
                }
                if let Some(pattern) = &self.pattern {
                    if !pattern.is_match(s) {
                        violations.push("Invalid format".to_string());
                    }
                }
                if let Some(format) = &self.format {
                    if !format.matches(s) {
                        violations.push(format.message().to_string());
                    }
                }
                if let Some(allowed) = &self.one_of {
                    if !allowed.iter().any(|candidate| candidate == s) {
                        violations.push(format!("Must be one of: {}", allowed.join(", ")));
                    }
                }
            }
            Value::Number(n) => {
                if let Some(number) = n.as_f64() {
                    if let Some(min) = self.min {
                        if number < min {
                            violations.push(format!("Must be greater than or equal to {}", min));
                        }
                    }
                    if let Some(max) = self.max {
                        if number > max {
                            violations.push(format!("Must be less than or equal to {}", max));
                        }
                    }
                }
            }
            Value::Array(items) => {
                if let Some(min) = self.min_length {
                    if items.len() < min {
                        violations.push(format!("Must contain at least {} items", min));
                    }
                }
                if let Some(max) = self.max_length {
                    if items.len() > max {
                        violations.push(format!("Must contain at most {} items", max));
                    }
                }
            }
            _ => {}
        }

        if let Some(message) = &self.message {
            for violation in violations.iter_mut() {
                *violation = message.clone();
            }
        }

        if let Some(check) = self.custom {
            if let Some(message) = check(value) {
                violations.push(message);
            }
        }

        violations
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn coerce_integer(raw: &Value) -> Option<Value> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(Value::from(i));
            }
            let f = n.as_f64()?;
            (f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64)
                .then(|| Value::from(f as i64))
        }
        Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
        _ => None,
    }
}

fn coerce_number(raw: &Value) -> Option<Value> {
    match raw {
        Value::Number(_) => Some(raw.clone()),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Some(Value::from(i));
            }
            let f = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
            serde_json::Number::from_f64(f).map(Value::Number)
        }
        _ => None,
    }
}

fn coerce_boolean(raw: &Value) -> Option<Value> {
    match raw {
        Value::Bool(_) => Some(raw.clone()),
        Value::String(s) => match s.trim() {
            t if t.eq_ignore_ascii_case("true") || t == "1" => Some(Value::Bool(true)),
            t if t.eq_ignore_ascii_case("false") || t == "0" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}
