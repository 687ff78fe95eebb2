//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` + `@Valid` | `ValidatedJson<T>` | 본문 매핑과 검증 |
//! | `@RequestParam` | `ValidatedQuery<T>` | 쿼리 매핑, 타입 변환, 검증 |
//! | `@PathVariable` | `ValidatedPath<T>` | 경로 파라미터 매핑과 검증 |
//! | `@NotBlank`, `@Email`, `@Size` | `FieldRule` 빌더 | 필드 제약 조건 |
//! | `@ApiModel` | `utoipa::ToSchema` | API 문서 |
//!
//! 요청 DTO는 [`RequestSchema`]를 구현해서 자신의 검증 규칙을 선언합니다.
//! 규칙은 처음 사용할 때 한 번만 만들어지며, `main`에서 [`verify_schemas`]로
//! 미리 만들어 두어 규칙 정의 오류를 기동 시점에 발견합니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/    # 클라이언트 → 서버 (검증 스키마 포함)
//!     └── response/   # 서버 → 클라이언트
//! ```

pub mod users;

pub use users::*;

use crate::validation::{RequestSchema, SchemaError};

/// 모든 요청 스키마를 미리 만들어 정의 오류를 확인합니다.
pub fn verify_schemas() -> Result<(), SchemaError> {
    CreateUserRequest::schema()?;
    LoginRequest::schema()?;
    RefreshTokenRequest::schema()?;
    ListUsersQuery::schema()?;
    UserIdPath::schema()?;
    Ok(())
}
