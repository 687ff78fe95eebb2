//! 블로그 플랫폼 API 백엔드
//!
//! actix-web 기반의 REST 백엔드입니다. 요청은 선언형 스키마로 검증하고,
//! 모든 응답은 같은 JSON 래퍼(`success`, `message`, `data`, `pagination`,
//! `errors`, `timestamp`, `path`)로 내보냅니다.
//!
//! # Features
//!
//! - **요청 검증**: 본문/쿼리/경로 파라미터를 스키마로 검증하고 타입을 변환
//! - **공통 응답 래퍼**: 성공/실패/페이지네이션 응답을 하나의 구조로 통일
//! - **사용자 관리**: 회원가입, 조회, 목록, 삭제
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  ErrorEnvelope  │ ← 모든 에러를 실패 래퍼로
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← ValidatedJson / ValidatedQuery / ValidatedPath (422)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← ApiResponse로 응답 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn UserRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blog_api_backend::response::ApiResponse;
//! use blog_api_backend::validation::ValidatedQuery;
//!
//! async fn list(req: HttpRequest, query: ValidatedQuery<ListUsersQuery>) -> AppResult<HttpResponse> {
//!     let (items, total) = service.list_users(&query).await?;
//!     Ok(ApiResponse::paginated(&req, "Users retrieved successfully", items, total, query.page, query.limit))
//! }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod openapi;
pub mod repositories;
pub mod response;
pub mod routes;
pub mod services;
pub mod validation;
