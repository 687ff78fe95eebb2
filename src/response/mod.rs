//! 응답 래퍼와 페이지네이션

pub mod envelope;
pub mod pagination;

pub use envelope::{ApiEnvelope, ApiResponse};
pub use pagination::{calculate_pagination, PaginationMeta, DEFAULT_PAGE_SIZE};
