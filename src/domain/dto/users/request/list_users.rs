//! 사용자 목록 조회 쿼리와 경로 파라미터

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::response::DEFAULT_PAGE_SIZE;
use crate::validation::{FieldRule, RequestSchema, Schema, SchemaError};

pub const MAX_PAGE_SIZE: i64 = 100;

/// `GET /api/v1/users` 쿼리
///
/// 쿼리 문자열의 값은 모두 문자열로 들어오지만, 검증을 거친 뒤에는 선언된 타입이 됩니다.
/// `?page=2&limit=20&role=admin&is_active=true`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// 1부터 시작 (기본값 1)
    pub page: i64,
    /// 1-100 (기본값 10)
    pub limit: i64,
    /// `user` 또는 `admin`
    pub role: Option<String>,
    /// 이메일, 사용자명, 표시 이름 부분 검색 (대소문자 무시)
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl RequestSchema for ListUsersQuery {
    fn schema() -> Result<&'static Schema, SchemaError> {
        static SCHEMA: OnceCell<Schema> = OnceCell::new();
        SCHEMA.get_or_try_init(|| {
            Schema::new(vec![
                FieldRule::integer("page").min(1.0).default_value(1),
                FieldRule::integer("limit")
                    .range(1.0, MAX_PAGE_SIZE as f64)
                    .default_value(DEFAULT_PAGE_SIZE),
                FieldRule::string("role").empty_as_absent().one_of(&["user", "admin"]),
                FieldRule::string("search").empty_as_absent().max_length(100),
                FieldRule::boolean("is_active").empty_as_absent(),
            ])
        })
    }
}

/// `/api/v1/users/{user_id}` 경로 파라미터
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserIdPath {
    /// MongoDB ObjectId (24자리 16진수)
    pub user_id: String,
}

impl RequestSchema for UserIdPath {
    fn schema() -> Result<&'static Schema, SchemaError> {
        static SCHEMA: OnceCell<Schema> = OnceCell::new();
        SCHEMA.get_or_try_init(|| {
            Ok(Schema::new(vec![FieldRule::string("user_id")
                .required()
                .pattern(Regex::new("[0-9a-fA-F]{24}")?)
                .message("Invalid user id")])?)
        })
    }
}
