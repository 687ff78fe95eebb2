//! JWT 토큰 발급/검증 서비스
//!
//! HS256으로 서명한 액세스/리프레시 토큰을 발급합니다.
//! 두 토큰은 `token_type` 클레임으로 구분되며, 서로 바꿔 쓸 수 없습니다.
//!
//! ```rust,ignore
//! let tokens = token_service.generate_token_pair(&user)?;
//! let claims = token_service.verify_token(&tokens.access_token, TokenType::Access)?;
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenType};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 환경 변수 설정으로 생성
    pub fn from_config() -> Self {
        Self::new(
            &JwtConfig::secret(),
            Duration::hours(JwtConfig::expiration_hours()),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }

    fn generate_token(&self, user: &User, token_type: TokenType) -> AppResult<String> {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            roles: user.roles.clone(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_token(user, TokenType::Access)?,
            refresh_token: self.generate_token(user, TokenType::Refresh)?,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// 서명, 만료, 토큰 용도를 검증합니다.
    pub fn verify_token(&self, token: &str, expected: TokenType) -> AppResult<TokenClaims> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::AuthenticationError("Token has expired".to_string()),
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })?;

        if claims.token_type != expected {
            return Err(AppError::AuthenticationError("Invalid token type".to_string()));
        }

        Ok(claims)
    }

    /// `Authorization: Bearer <token>` 헤더 값에서 토큰만 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }
}
