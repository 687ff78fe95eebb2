//! 인증 요청 DTO

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldRule, Format, RequestSchema, Schema, SchemaError};

/// 이메일/비밀번호 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub password: String,
}

impl RequestSchema for LoginRequest {
    fn schema() -> Result<&'static Schema, SchemaError> {
        static SCHEMA: OnceCell<Schema> = OnceCell::new();
        SCHEMA.get_or_try_init(|| {
            Schema::new(vec![
                FieldRule::string("email").required().format(Format::Email),
                FieldRule::string("password").required().min_length(1),
            ])
        })
    }
}

/// 토큰 갱신 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

impl RequestSchema for RefreshTokenRequest {
    fn schema() -> Result<&'static Schema, SchemaError> {
        static SCHEMA: OnceCell<Schema> = OnceCell::new();
        SCHEMA.get_or_try_init(|| {
            Schema::new(vec![FieldRule::string("refresh_token").required().min_length(1)])
        })
    }
}
