//! # 검증 추출기 (Validated Extractors)
//!
//! `web::Json`, `web::Query`, `web::Path` 대신 사용하는 추출기입니다.
//! 요청 세그먼트를 스키마로 검증한 뒤, 변환된 값을 DTO 타입으로 역직렬화해서
//! 핸들러에 넘깁니다. 검증에 실패하면 핸들러는 호출되지 않고 422 응답이 나갑니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_users(
//!     req: HttpRequest,
//!     query: ValidatedQuery<ListUsersQuery>,   // ?page=2 → page: u64 = 2
//! ) -> Result<HttpResponse, AppError> {
//!     let query = query.into_inner();
//!     // ...
//! }
//! ```

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};

use super::error::SchemaError;
use super::schema::{Schema, Segment};

/// 요청 DTO가 자신의 검증 스키마를 선언하는 trait
///
/// 스키마는 `OnceCell`에 한 번만 만들어 두고 참조를 돌려주는 방식으로 구현합니다.
///
/// ```rust,ignore
/// impl RequestSchema for LoginRequest {
///     fn schema() -> Result<&'static Schema, SchemaError> {
///         static SCHEMA: OnceCell<Schema> = OnceCell::new();
///         SCHEMA.get_or_try_init(|| Schema::new(vec![/* ... */]))
///     }
/// }
/// ```
pub trait RequestSchema: DeserializeOwned {
    fn schema() -> Result<&'static Schema, SchemaError>;
}

/// 세그먼트 값 하나를 검증하고 DTO로 변환합니다.
///
/// 추출기 밖(서비스 테스트 등)에서도 같은 규칙을 적용하고 싶을 때 직접 호출합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 하나 이상의 제약 조건 위반
/// * `AppError::InternalError` - 스키마 정의 오류, 또는 스키마와 DTO 구조 불일치
pub fn validate_segment<T: RequestSchema>(segment: Segment, raw: &Value) -> AppResult<T> {
    let schema = T::schema()
        .map_err(|e| AppError::InternalError(format!("{} 스키마 구성 실패: {}", segment, e)))?;

    let normalized = schema.validate(segment, raw).map_err(|errors| {
        log::debug!("{} 검증 실패: {} 건 {:?}", segment, errors.len(), errors);
        AppError::ValidationError(errors)
    })?;

    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("검증된 {} 역직렬화 실패: {}", segment, e)))
}

/// 키-값 쌍 목록을 JSON 객체로 모읍니다. 같은 키가 반복되면 배열이 됩니다.
pub(crate) fn pairs_to_value<I, K, V>(pairs: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();

    for (key, value) in pairs {
        let key = key.into();
        let value = Value::String(value.into());

        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(key, value);
            }
        }
    }

    Value::Object(map)
}

fn query_to_value(query_string: &str) -> AppResult<Value> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
        .map_err(|e| AppError::BadRequest(format!("Malformed query string: {}", e)))?;

    Ok(pairs_to_value(pairs.into_inner()))
}

macro_rules! validated_wrapper {
    ($name:ident) => {
        impl<T> $name<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }
    };
}

/// 검증된 JSON 본문
///
/// 본문 파싱 자체는 `web::Json`에 맡기므로 `JsonConfig`(크기 제한, 에러 핸들러)가 그대로 적용됩니다.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// 검증된 쿼리 파라미터
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// 검증된 경로 파라미터
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

validated_wrapper!(ValidatedJson);
validated_wrapper!(ValidatedQuery);
validated_wrapper!(ValidatedPath);

impl<T: RequestSchema + 'static> FromRequest for ValidatedJson<T> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let raw = body.await?.into_inner();
            let value = validate_segment::<T>(Segment::Body, &raw)?;
            Ok(ValidatedJson(value))
        })
    }
}

impl<T: RequestSchema> FromRequest for ValidatedQuery<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = query_to_value(req.query_string())
            .and_then(|raw| validate_segment::<T>(Segment::Query, &raw))
            .map(ValidatedQuery)
            .map_err(Into::into);

        ready(result)
    }
}

impl<T: RequestSchema> FromRequest for ValidatedPath<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = pairs_to_value(req.match_info().iter());
        let result = validate_segment::<T>(Segment::Params, &raw)
            .map(ValidatedPath)
            .map_err(Into::into);

        ready(result)
    }
}
