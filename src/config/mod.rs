//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, Rate Limiting, CORS, 환경 설정
//! - [`auth_config`] - JWT 설정
//!
//! 환경 변수는 `main`에서 `PROFILE`에 맞는 `.env` 파일을 읽은 뒤 사용됩니다.
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let address = ServerConfig::bind_address();
//! let secret = JwtConfig::secret();
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct ServerConfig` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `application-{profile}.yml` | `.env.{profile}` |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
