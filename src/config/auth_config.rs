//! 인증 관련 설정
//!
//! JWT 서명 키와 토큰 만료 시간을 환경 변수에서 읽습니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```

use std::env;

/// JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 서명 키. 없으면 개발용 기본값을 사용하며 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    pub fn has_secret() -> bool {
        env::var("JWT_SECRET").is_ok_and(|secret| !secret.trim().is_empty())
    }

    /// 액세스 토큰 만료 시간. 1시간 ~ 30일 범위를 벗어나면 기본값 24시간.
    pub fn expiration_hours() -> i64 {
        Self::bounded_or("JWT_EXPIRATION_HOURS", 24, MAX_ACCESS_HOURS)
    }

    /// 리프레시 토큰 만료 일수. 1일 ~ 1년 범위를 벗어나면 기본값 7일.
    pub fn refresh_expiration_days() -> i64 {
        Self::bounded_or("JWT_REFRESH_EXPIRATION_DAYS", 7, MAX_REFRESH_DAYS)
    }

    fn bounded_or(key: &str, default: i64, max: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => parse_bounded(&raw, max).unwrap_or_else(|| {
                log::warn!("⚠️ {} 값이 유효하지 않습니다 (1-{}): {}", key, max, raw);
                default
            }),
            Err(_) => default,
        }
    }
}

const MAX_ACCESS_HOURS: i64 = 24 * 30;
const MAX_REFRESH_DAYS: i64 = 365;

fn parse_bounded(raw: &str, max: i64) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (1..=max).contains(value))
}
