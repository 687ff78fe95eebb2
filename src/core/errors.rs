//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 일관된 에러 응답을 만듭니다.
//!
//! 모든 에러는 [`ApiResponse`](crate::response::ApiResponse)와 같은 실패 래퍼로 변환됩니다.
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "User not found",
//!   "timestamp": "2025-01-15T10:30:00.000Z",
//!   "path": "/api/v1/users/65a5..."
//! }
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `@ControllerAdvice` | `ErrorEnvelope` 미들웨어 |
//! | `@ResponseStatus` | `ResponseError::status_code()` |
//! | `MethodArgumentNotValidException` | `AppError::ValidationError` |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트 메시지 |
//! |----------|-------------|-------------------|
//! | `BadRequest` | 400 Bad Request | 원본 메시지 |
//! | `ValidationError` | 422 Unprocessable Entity | `Validation failed` + 필드 에러 목록 |
//! | `AuthenticationError` | 401 Unauthorized | 원본 메시지 |
//! | `AuthorizationError` | 403 Forbidden | 원본 메시지 |
//! | `NotFound` | 404 Not Found | 원본 메시지 |
//! | `ConflictError` | 409 Conflict | 원본 메시지 |
//! | `DatabaseError` | 500 Internal Server Error | `Internal server error` |
//! | `InternalError` | 500 Internal Server Error | `Internal server error` |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 남기고 클라이언트에는 노출하지 않습니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::response::ApiResponse;
use crate::validation::FieldError;

/// 5xx 응답에 사용하는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 스키마 검증 실패 응답 메시지
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 반환하기만 하면 실패 래퍼 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 리소스 없음
/// let user = repo.find_by_id(id).await?
///     .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 자체를 해석할 수 없음 (깨진 JSON, 깨진 쿼리 문자열)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 스키마 검증 실패
    ///
    /// 위반된 모든 필드의 에러를 담습니다. 422 Unprocessable Entity로 응답됩니다.
    #[error("Validation failed: {} field error(s)", .0.len())]
    ValidationError(Vec<FieldError>),

    /// 인증 실패 (토큰 없음, 만료, 서명 불일치, 잘못된 로그인 정보)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터, 비즈니스 규칙 위반
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러
    ///
    /// 연결 타임아웃, 쿼리 실패 등. 메시지는 로그에만 남습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상하지 못한 시스템 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 보여줄 메시지
    ///
    /// 5xx 에러는 내부 정보를 숨기고 항상 고정 메시지를 돌려줍니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg) => msg.clone(),
            AppError::ValidationError(_) => VALIDATION_FAILED_MESSAGE.to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// 필드 단위 에러 목록 (검증 실패일 때만 존재)
    pub fn field_errors(&self) -> Option<Vec<FieldError>> {
        match self {
            AppError::ValidationError(errors) => Some(errors.clone()),
            _ => None,
        }
    }

    /// 지정한 요청 경로로 실패 래퍼 응답을 만듭니다.
    ///
    /// `ResponseError::error_response`에는 요청 정보가 없으므로,
    /// `ErrorEnvelope` 미들웨어가 실제 경로를 넣어 다시 호출합니다.
    pub fn to_envelope_response(&self, path: &str) -> HttpResponse {
        use actix_web::ResponseError;

        ApiResponse::error_at(path, self.status_code(), self.client_message(), self.field_errors())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 여기서 한 번만 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("❌ 처리되지 않은 서버 오류: {}", self);
        }

        self.to_envelope_response("")
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn create_user(data: CreateUserRequest) -> AppResult<UserResponse> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(&password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use serde_json::{json, Value};

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::ValidationError(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::AuthenticationError("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::AuthorizationError("x".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("x".into()), StatusCode::CONFLICT),
            (AppError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.error_response().status(), status, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_not_found_keeps_message() {
        let resp = AppError::NotFound("User not found".into()).to_envelope_response("/api/v1/users/1");
        let body = body_json(resp).await;

        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("User not found"));
        assert_eq!(body["path"], json!("/api/v1/users/1"));
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_validation_error_lists_fields() {
        let error = AppError::ValidationError(vec![
            FieldError::new("email", "Invalid email format"),
            FieldError::new("password", "Must be at least 8 characters"),
        ]);
        let body = body_json(error.to_envelope_response("/api/v1/users")).await;

        assert_eq!(body["message"], json!("Validation failed"));
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["errors"][1]["field"], json!("password"));
    }

    #[actix_web::test]
    async fn test_server_errors_hide_details() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3:27017".into());
        let body = body_json(error.error_response()).await;

        assert_eq!(body["message"], json!("Internal server error"));
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
