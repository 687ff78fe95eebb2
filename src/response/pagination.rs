//! 페이지네이션 메타데이터 계산

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 페이지 크기가 유효하지 않을 때 대신 사용하는 값
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// 목록 응답에 붙는 페이지네이션 정보
///
/// 저장하지 않고 요청마다 `calculate_pagination`으로 계산합니다.
///
/// ```json
/// {
///   "currentPage": 1, "perPage": 10, "totalItems": 42, "totalPages": 5,
///   "hasNextPage": true, "hasPreviousPage": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    /// 현재 페이지의 첫 항목 위치. 저장소 조회의 skip 값으로 사용합니다.
    pub fn offset(&self) -> u64 {
        (self.current_page - 1) * self.per_page
    }
}

/// 전체 항목 수, 요청 페이지, 페이지 크기로 메타데이터를 계산합니다.
///
/// 입력이 범위를 벗어나도 실패하지 않고 가장 가까운 유효값으로 맞춥니다.
///
/// - `limit <= 0` → `DEFAULT_PAGE_SIZE`
/// - `page`는 `[1, max(total_pages, 1)]` 범위로 고정
///
/// # Examples
///
/// ```
/// use blog_api_backend::response::calculate_pagination;
///
/// let meta = calculate_pagination(25, 3, 10);
/// assert_eq!(meta.total_pages, 3);
/// assert!(!meta.has_next_page);
/// assert!(meta.has_previous_page);
/// ```
pub fn calculate_pagination(total_items: u64, page: i64, limit: i64) -> PaginationMeta {
    let per_page = if limit > 0 { limit as u64 } else { DEFAULT_PAGE_SIZE };
    let total_pages = total_items.div_ceil(per_page);

    let last_page = total_pages.max(1);
    let current_page = if page < 1 { 1 } else { (page as u64).min(last_page) };

    PaginationMeta {
        current_page,
        per_page,
        total_items,
        total_pages,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
    }
}
