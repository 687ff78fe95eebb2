//! 사용자/인증 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

/// 사용자 정보 응답
///
/// 비밀번호 해시를 제외하고, ID와 시각은 문자열로 변환해서 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub is_active: bool,
    pub roles: Vec<String>,
    /// RFC 3339
    pub last_login_at: Option<String>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

fn to_rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            display_name,
            is_active,
            roles,
            last_login_at,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            username,
            display_name,
            is_active,
            roles,
            last_login_at: last_login_at.map(to_rfc3339),
            created_at: to_rfc3339(created_at),
            updated_at: to_rfc3339(updated_at),
        }
    }
}

/// 토큰 응답 (OAuth 2.0 Bearer Token 형식)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// 항상 `Bearer`
    pub token_type: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: pair.expires_in,
        }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenResponse,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            tokens: TokenResponse::from(tokens),
        }
    }
}
