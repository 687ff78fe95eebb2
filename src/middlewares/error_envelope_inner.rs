//! ErrorEnvelope 미들웨어의 실제 변환 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderMap};
use actix_web::http::StatusCode;
use actix_web::{error::InternalError, Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, INTERNAL_ERROR_MESSAGE};
use crate::response::ApiResponse;

/// 에러 응답을 다시 쓰는 서비스
pub struct ErrorEnvelopeService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorEnvelopeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        // 요청 자체를 복제하면 안쪽 라우터가 요청을 고칠 수 없으므로 경로만 보관
        let path = req.path().to_owned();

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => match rewrite_response(res.response(), &path) {
                    Some(response) => {
                        let (req, _) = res.into_parts();
                        Ok(ServiceResponse::new(req, response).map_into_right_body())
                    }
                    None => Ok(res.map_into_left_body()),
                },
                Err(err) => {
                    let mut response = render_error(&err, &path);
                    carry_headers(err.error_response().headers(), &mut response);
                    Err(InternalError::from_response(err.to_string(), response).into())
                }
            }
        })
    }
}

/// 실패 래퍼로 바꿔야 하는 응답이면 새 응답을 돌려줍니다.
///
/// 에러가 붙은 응답과, 미들웨어가 직접 만든 JSON이 아닌 4xx/5xx 응답(Rate Limit 429 등)이 대상입니다.
fn rewrite_response<B>(res: &HttpResponse<B>, path: &str) -> Option<HttpResponse> {
    let mut response = match res.error() {
        Some(err) => render_error(err, path),
        None if is_bare_failure(res) => {
            let status = res.status();
            let message = status.canonical_reason().unwrap_or("Request failed");
            render_status(status, message, path)
        }
        None => return None,
    };

    carry_headers(res.headers(), &mut response);
    Some(response)
}

fn is_bare_failure<B>(res: &HttpResponse<B>) -> bool {
    let status = res.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return false;
    }

    !res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// 에러 하나를 실패 래퍼 응답으로 변환
fn render_error(err: &Error, path: &str) -> HttpResponse {
    if let Some(app_error) = err.as_error::<AppError>() {
        return app_error.to_envelope_response(path);
    }

    let status = err.as_response_error().status_code();
    if status.is_server_error() {
        log::error!("❌ 처리되지 않은 오류 ({}): {} [{}]", status, err, path);
    }

    render_status(status, err.to_string(), path)
}

fn render_status(status: StatusCode, message: impl Into<String>, path: &str) -> HttpResponse {
    if status.is_server_error() {
        return ApiResponse::error_at(path, StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, None);
    }

    ApiResponse::error_at(path, status, message, None)
}

/// CORS, Rate Limit 헤더 등은 새 응답에도 남깁니다. 본문 관련 헤더는 제외.
fn carry_headers(from: &HeaderMap, to: &mut HttpResponse) {
    for (name, value) in from.iter() {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        to.headers_mut().append(name.clone(), value.clone());
    }
}
