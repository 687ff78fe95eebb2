//! # 공통 응답 래퍼 (Response Envelope)
//!
//! 모든 API 응답을 같은 JSON 구조로 감싸는 빌더입니다.
//! Spring의 `ResponseEntity<ApiResponse<T>>` 패턴과 같은 역할을 합니다.
//!
//! ## 성공 응답
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Users retrieved successfully",
//!   "data": [ ... ],
//!   "pagination": { "currentPage": 1, "perPage": 10, "totalItems": 42, "totalPages": 5,
//!                   "hasNextPage": true, "hasPreviousPage": false },
//!   "timestamp": "2025-01-15T10:30:00.000Z",
//!   "path": "/api/v1/users"
//! }
//! ```
//!
//! ## 실패 응답
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation failed",
//!   "errors": [ { "field": "email", "message": "Invalid email format" } ],
//!   "timestamp": "2025-01-15T10:30:00.000Z",
//!   "path": "/api/v1/users"
//! }
//! ```
//!
//! 성공 응답에는 `errors`가, 실패 응답에는 `data`가 절대 포함되지 않습니다.
//! 이 규칙은 `ApiEnvelope`의 생성자를 통해서만 값을 만들 수 있게 해서 보장합니다.
//!
//! ## 상태 코드
//!
//! | 코드 | 용도 | 메서드 |
//! |------|------|--------|
//! | 200 | 조회/수정 성공 | `success`, `paginated` |
//! | 201 | 생성 성공 | `created` |
//! | 204 | 삭제 성공 (본문 없음) | `no_content` |
//! | 400 | 잘못된 요청 | `bad_request` |
//! | 401 | 인증 실패 | `unauthorized` |
//! | 403 | 권한 부족 | `forbidden` |
//! | 404 | 리소스 없음 | `not_found` |
//! | 409 | 중복 충돌 | `conflict` |
//! | 422 | 스키마 검증 실패 | `validation_failed` |
//! | 500 | 처리되지 않은 오류 | `internal_error` |

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::FieldError;

use super::pagination::{calculate_pagination, PaginationMeta};

/// 모든 응답 본문의 공통 구조
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
    /// ISO-8601, 밀리초 단위, UTC
    timestamp: String,
    path: String,
}

impl<T> ApiEnvelope<T> {
    pub fn success(
        message: impl Into<String>,
        data: Option<T>,
        pagination: Option<PaginationMeta>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            pagination,
            errors: None,
            timestamp: now_timestamp(),
            path: path.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.pagination.as_ref()
    }

    pub fn errors(&self) -> Option<&[FieldError]> {
        self.errors.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ApiEnvelope<()> {
    /// 실패 응답. 빈 에러 목록은 `errors` 키 자체를 생략합니다.
    pub fn failure(
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
            errors: errors.filter(|errors| !errors.is_empty()),
            timestamp: now_timestamp(),
            path: path.into(),
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 응답 빌더
///
/// 모든 메서드는 완성된 `HttpResponse`를 돌려주며 실패하지 않습니다.
///
/// ```rust,ignore
/// #[post("")]
/// pub async fn create_user(req: HttpRequest, body: ValidatedJson<CreateUserRequest>, ...)
///     -> Result<HttpResponse, AppError>
/// {
///     let user = service.create_user(body.into_inner()).await?;
///     Ok(ApiResponse::created(&req, "User created successfully", user))
/// }
/// ```
pub struct ApiResponse;

impl ApiResponse {
    /// 200 OK
    pub fn success<T: Serialize>(req: &HttpRequest, message: impl Into<String>, data: T) -> HttpResponse {
        Self::success_with(req, StatusCode::OK, message, Some(data), None)
    }

    /// 상태 코드와 페이지네이션을 직접 지정하는 성공 응답
    ///
    /// 204가 지정되면 본문 없는 응답으로 바꿉니다.
    pub fn success_with<T: Serialize>(
        req: &HttpRequest,
        status: StatusCode,
        message: impl Into<String>,
        data: Option<T>,
        pagination: Option<PaginationMeta>,
    ) -> HttpResponse {
        if status == StatusCode::NO_CONTENT {
            return Self::no_content();
        }

        HttpResponse::build(status).json(ApiEnvelope::success(message, data, pagination, req.path()))
    }

    /// 201 Created
    pub fn created<T: Serialize>(req: &HttpRequest, message: impl Into<String>, data: T) -> HttpResponse {
        Self::success_with(req, StatusCode::CREATED, message, Some(data), None)
    }

    /// 목록과 원시 카운트로 페이지네이션을 계산해서 응답합니다.
    pub fn paginated<T: Serialize>(
        req: &HttpRequest,
        message: impl Into<String>,
        items: Vec<T>,
        total_items: u64,
        page: i64,
        limit: i64,
    ) -> HttpResponse {
        let pagination = calculate_pagination(total_items, page, limit);
        Self::success_with(req, StatusCode::OK, message, Some(items), Some(pagination))
    }

    /// 204 No Content (본문 없음)
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    /// 실패 응답. 경로를 문자열로 받으므로 요청 객체가 없는 곳(에러 변환)에서도 사용합니다.
    pub fn error_at(
        path: &str,
        status: StatusCode,
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiEnvelope::failure(message, errors, path))
    }

    pub fn error(
        req: &HttpRequest,
        status: StatusCode,
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
    ) -> HttpResponse {
        Self::error_at(req.path(), status, message, errors)
    }

    pub fn bad_request(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::BAD_REQUEST, message, errors)
    }

    pub fn unauthorized(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::UNAUTHORIZED, message, errors)
    }

    pub fn forbidden(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::FORBIDDEN, message, errors)
    }

    pub fn not_found(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::NOT_FOUND, message, errors)
    }

    pub fn conflict(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::CONFLICT, message, errors)
    }

    pub fn validation_failed(
        req: &HttpRequest,
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
    ) -> HttpResponse {
        Self::error(req, StatusCode::UNPROCESSABLE_ENTITY, message, errors)
    }

    pub fn internal_error(req: &HttpRequest, message: impl Into<String>, errors: Option<Vec<FieldError>>) -> HttpResponse {
        Self::error(req, StatusCode::INTERNAL_SERVER_ERROR, message, errors)
    }
}
