//! # Core Module
//!
//! 애플리케이션 전역 에러 타입과 HTTP 응답 변환을 제공합니다.
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ControllerAdvice` + `@ExceptionHandler` | `AppError` + `ResponseError` |
//! | `ResponseStatusException` | `AppError` 변형별 상태 코드 |

pub mod errors;

pub use errors::*;
