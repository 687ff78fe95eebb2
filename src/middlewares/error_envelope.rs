//! 에러 응답 래핑 미들웨어
//!
//! 애플리케이션의 가장 바깥에서 모든 에러 응답을 공통 실패 래퍼로 다시 씁니다.
//! Spring의 `@ControllerAdvice`와 같은 위치에 있습니다.
//!
//! - `AppError`: 실제 요청 경로를 넣어 다시 렌더링
//! - 프레임워크 4xx 에러 (라우팅, 헤더 파싱 등): 상태 코드와 메시지를 유지
//! - 그 밖의 5xx 에러: 로그를 남기고 `500 Internal server error`로 통일
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(Logger::default())
//!     .wrap(ErrorEnvelope)
//!     .service(/* 라우트들 */)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;

use crate::middlewares::error_envelope_inner::ErrorEnvelopeService;

/// 실패 래퍼 정규화 미들웨어
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorEnvelope;

impl<S, B> Transform<S, ServiceRequest> for ErrorEnvelope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorEnvelopeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorEnvelopeService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use actix_cors::Cors;
    use actix_web::http::header::{self, HeaderValue};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::{json, Value};

    const FRONTEND: &str = "http://blog.example";

    async fn missing_user() -> Result<HttpResponse, AppError> {
        Err(AppError::NotFound("User not found".to_string()))
    }

    async fn broken_database() -> Result<HttpResponse, AppError> {
        Err(AppError::DatabaseError("socket closed by 10.1.2.3".to_string()))
    }

    async fn foreign_failure() -> Result<HttpResponse, actix_web::Error> {
        Err(actix_web::error::ErrorServiceUnavailable("upstream pool exhausted"))
    }

    async fn plain_ok() -> HttpResponse {
        HttpResponse::Ok().body("pong")
    }

    async fn throttled() -> HttpResponse {
        HttpResponse::TooManyRequests()
            .insert_header(("retry-after", "3"))
            .body("Too many requests, retry after 3s")
    }

    async fn fallback() -> Result<HttpResponse, AppError> {
        Err(AppError::NotFound("Route not found".to_string()))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .wrap(ErrorEnvelope)
                    .route("/users/{id}", web::get().to(missing_user))
                    .route("/db", web::get().to(broken_database))
                    .route("/foreign", web::get().to(foreign_failure))
                    .route("/ping", web::get().to(plain_ok))
                    .route("/throttled", web::get().to(throttled))
                    .default_service(web::to(fallback)),
            )
            .await
        };
    }

    fn from_frontend(uri: &str) -> test::TestRequest {
        test::TestRequest::get().uri(uri).insert_header((header::ORIGIN, FRONTEND))
    }

    #[actix_web::test]
    async fn test_app_error_gets_request_path() {
        let app = app!();
        let req = test::TestRequest::get().uri("/users/42?verbose=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("User not found"));
        assert_eq!(body["path"], json!("/users/42"));
    }

    #[actix_web::test]
    async fn test_server_error_is_generic() {
        let app = app!();
        let req = test::TestRequest::get().uri("/db").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Internal server error"));
        assert!(!body.to_string().contains("10.1.2.3"));
    }

    #[actix_web::test]
    async fn test_foreign_server_error_is_normalized() {
        let app = app!();
        let req = test::TestRequest::get().uri("/foreign").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Internal server error"));
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_unmatched_route_uses_envelope() {
        let app = app!();
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Route not found"));
        assert_eq!(body["path"], json!("/nowhere"));
    }

    #[actix_web::test]
    async fn test_success_passes_through() {
        let app = app!();
        let req = test::TestRequest::get().uri("/ping").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"pong"));
    }

    #[actix_web::test]
    async fn test_bare_failure_response_is_enveloped_with_headers() {
        let app = app!();
        let req = test::TestRequest::get().uri("/throttled").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get("retry-after"), Some(&HeaderValue::from_static("3")));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Too Many Requests"));
        assert_eq!(body["path"], json!("/throttled"));
    }

    #[actix_web::test]
    async fn test_cors_headers_survive_rewrite() {
        let app = test::init_service(
            App::new()
                .wrap(Cors::default().allowed_origin(FRONTEND))
                .wrap(ErrorEnvelope)
                .route("/ping", web::get().to(plain_ok))
                .default_service(web::to(fallback)),
        )
        .await;

        let ok = test::call_service(&app, from_frontend("/ping").to_request()).await;
        assert_eq!(
            ok.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static(FRONTEND))
        );

        let missing = test::call_service(&app, from_frontend("/missing").to_request()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            missing.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static(FRONTEND))
        );
        assert_eq!(
            missing.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );

        let body: Value = test::read_body_json(missing).await;
        assert_eq!(body["path"], json!("/missing"));
    }

    #[actix_web::test]
    async fn test_inner_middleware_error_is_enveloped() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|req, srv| {
                    let rejected = req.path() == "/gate";
                    let fut = srv.call(req);
                    async move {
                        if rejected {
                            let blocked = HttpResponse::Forbidden()
                                .insert_header(("x-gate", "closed"))
                                .finish();
                            return Err(actix_web::error::InternalError::from_response("Gate closed", blocked).into());
                        }
                        fut.await
                    }
                })
                .wrap(ErrorEnvelope)
                .route("/gate", web::get().to(plain_ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/gate").to_request();
        let err = match test::try_call_service(&app, req).await {
            Ok(_) => panic!("gate should reject the request"),
            Err(err) => err,
        };

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(resp.headers().get("x-gate"), Some(&HeaderValue::from_static("closed")));

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], json!("Gate closed"));
        assert_eq!(body["path"], json!("/gate"));
    }
}
