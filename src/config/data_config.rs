//! 서버, 데이터베이스, 환경 관련 설정
//!
//! 모든 값은 환경 변수에서 읽고, 없거나 잘못된 값이면 기본값을 사용합니다.
//! 잘못된 값은 경고 로그를 남깁니다.
//!
//! | 환경 변수 | 기본값 | 설명 |
//! |-----------|--------|------|
//! | `ENVIRONMENT` | `production` | development, test, staging, production |
//! | `HOST` | `0.0.0.0` | 바인딩 주소 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `WORKERS` | `4` | actix 워커 수 |
//! | `BCRYPT_COST` | 환경별 | 4-15 범위 |
//! | `MONGODB_URI` | `mongodb://localhost:27017` | |
//! | `DATABASE_NAME` | `blog_api_dev` | |
//! | `RATE_LIMIT_PER_SECOND` | `100` | |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` | 쉼표로 구분 |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱합니다. 파싱에 실패하면 경고를 남기고 기본값을 사용합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("⚠️ {} 파싱 실패 ({}): {}. 기본값 {} 사용", key, raw, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 판별합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 알 수 없는 값은 가장 보수적인 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            match cost_str.parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => return cost,
                _ => log::warn!("⚠️ BCRYPT_COST 값이 유효하지 않습니다: {}", cost_str),
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "blog_api_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        )
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
