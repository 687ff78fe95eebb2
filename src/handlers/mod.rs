//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! Spring의 `@RestController` 레이어에 해당합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request
//!   ▼
//! ErrorEnvelope ─▶ AuthMiddleware ─▶ Validated* 추출자 ─▶ Handler ─▶ Service ─▶ Repository
//!   ▲                                                       │
//!   └──────────────── ApiResponse (공통 응답 래퍼) ◀─────────┘
//! ```
//!
//! ## Spring과의 대응
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Valid @RequestBody` | `ValidatedJson<T>` |
//! | `@Valid @ModelAttribute` (쿼리) | `ValidatedQuery<T>` |
//! | `@PathVariable` + 검증 | `ValidatedPath<T>` |
//! | `@Autowired UserService` | `web::Data<UserService>` |
//! | `ResponseEntity<ApiResponse<T>>` | `ApiResponse::success/created/paginated` |
//!
//! 핸들러는 검증을 직접 하지 않습니다. 추출자를 통과한 값은 이미 선언된 타입으로
//! 정규화되어 있고, 실패한 요청은 422 응답으로 끝나 핸들러까지 오지 않습니다.
//! 서비스가 돌려준 `AppError`는 그대로 `?`로 전파합니다.

#[cfg(test)]
#[macro_use]
pub(crate) mod test_support;

pub mod auth;
pub mod users;
