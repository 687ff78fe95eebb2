//! 회원가입 요청 DTO

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::validation::{FieldError, FieldRule, Format, RequestSchema, Schema, SchemaError};

/// 영문/숫자/언더스코어
const USERNAME_PATTERN: &str = "[A-Za-z0-9_]+";

/// 회원가입 요청
///
/// ```json
/// {
///   "email": "jane@example.com",
///   "username": "jane_doe",
///   "display_name": "Jane",
///   "password": "Secret123",
///   "password_confirm": "Secret123"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// 3-30자, 영문/숫자/언더스코어
    #[schema(example = "jane_doe")]
    pub username: String,
    /// 1-50자
    pub display_name: String,
    /// 8자 이상, 대문자/소문자/숫자 포함
    pub password: String,
    pub password_confirm: String,
}

impl RequestSchema for CreateUserRequest {
    fn schema() -> Result<&'static Schema, SchemaError> {
        static SCHEMA: OnceCell<Schema> = OnceCell::new();
        SCHEMA.get_or_try_init(|| {
            Ok(Schema::new(vec![
                FieldRule::string("email").required().format(Format::Email),
                FieldRule::string("username")
                    .required()
                    .length(3, 30)
                    .pattern(Regex::new(USERNAME_PATTERN)?),
                FieldRule::string("display_name").required().length(1, 50),
                FieldRule::string("password")
                    .required()
                    .min_length(8)
                    .custom(password_strength),
                FieldRule::string("password_confirm").required(),
            ])?
            .refine(passwords_match))
        })
    }
}

fn password_strength(value: &Value) -> Option<String> {
    let password = value.as_str()?;
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_uppercase && has_lowercase && has_digit {
        None
    } else {
        Some("Must contain an uppercase letter, a lowercase letter and a digit".to_string())
    }
}

fn passwords_match(body: &Map<String, Value>) -> Option<FieldError> {
    (body.get("password") != body.get("password_confirm"))
        .then(|| FieldError::new("password_confirm", "Passwords do not match"))
}
