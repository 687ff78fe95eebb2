//! JWT 클레임과 토큰 쌍

use serde::{Deserialize, Serialize};

/// 토큰 용도. 리프레시 토큰으로 API를 호출하거나 그 반대를 막기 위해 클레임에 기록합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId 16진수)
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub token_type: TokenType,
    /// 토큰 고유 ID
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 액세스/리프레시 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
}
