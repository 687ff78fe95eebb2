//! JWT 인증 미들웨어
//!
//! 스코프 단위로 액세스 토큰을 검증하고, 성공하면 [`AuthenticatedUser`]를
//! request extension에 넣습니다. 핸들러는 추출자로 꺼내 씁니다.
//!
//! 토큰 서비스는 `App::app_data(web::Data<TokenService>)`로 등록되어 있어야 합니다.
//! 거절 응답은 다른 에러와 같은 실패 래퍼 형식을 사용합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::{AuthMode, RequiredRole};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            required_role: None,
        }
    }

    pub fn new_with_role(mode: AuthMode, required_role: RequiredRole) -> Self {
        Self {
            mode,
            required_role: Some(required_role),
        }
    }

    /// 필수 인증
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// 특정 역할 요구
    pub fn required_with_role(role: &str) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::Single(role.to_string()))
    }

    /// 복수 역할 중 하나 요구
    pub fn required_with_roles(roles: &[&str]) -> Self {
        Self::new_with_role(AuthMode::Required, RequiredRole::any_of(roles))
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{User, ROLE_ADMIN};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    fn token_service() -> TokenService {
        TokenService::new("middleware-secret", Duration::hours(1), Duration::days(7))
    }

    fn user(admin: bool) -> User {
        let mut user = User::new("jane@example.com".into(), "jane_doe".into(), "Jane".into(), "h".into());
        user.id = Some(ObjectId::new());
        if admin {
            user.roles.push(ROLE_ADMIN.to_string());
        }
        user
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    async fn maybe_whoami(user: Option<AuthenticatedUser>) -> HttpResponse {
        HttpResponse::Ok().body(user.map(|u| u.email).unwrap_or_else(|| "anonymous".to_string()))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(token_service()))
                    .service(
                        web::scope("/private")
                            .wrap(AuthMiddleware::required())
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(AuthMiddleware::required_with_role(ROLE_ADMIN))
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/staff")
                            .wrap(AuthMiddleware::required_with_roles(&["editor", ROLE_ADMIN]))
                            .route("", web::get().to(whoami)),
                    )
                    .service(
                        web::scope("/public")
                            .wrap(AuthMiddleware::optional())
                            .route("", web::get().to(maybe_whoami)),
                    ),
            )
            .await
        };
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected_with_envelope() {
        let app = app!();
        let req = test::TestRequest::get().uri("/private").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Authentication required"));
        assert_eq!(body["path"], json!("/private"));
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        let app = app!();
        let tokens = token_service().generate_token_pair(&user(false)).unwrap();
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(bearer(&tokens.access_token))
            .to_request();

        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"jane@example.com"));
    }

    #[actix_web::test]
    async fn test_refresh_token_is_not_accepted() {
        let app = app!();
        let tokens = token_service().generate_token_pair(&user(false)).unwrap();
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(bearer(&tokens.refresh_token))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_role_is_forbidden() {
        let app = app!();
        let tokens = token_service().generate_token_pair(&user(false)).unwrap();
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&tokens.access_token))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Insufficient permissions"));
    }

    #[actix_web::test]
    async fn test_admin_role_passes() {
        let app = app!();
        let tokens = token_service().generate_token_pair(&user(true)).unwrap();
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&tokens.access_token))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_any_of_roles() {
        let app = app!();
        let member = token_service().generate_token_pair(&user(false)).unwrap();
        let admin = token_service().generate_token_pair(&user(true)).unwrap();

        let req = test::TestRequest::get()
            .uri("/staff")
            .insert_header(bearer(&member.access_token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/staff")
            .insert_header(bearer(&admin.access_token))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous() {
        let app = app!();

        let anonymous = test::TestRequest::get().uri("/public").to_request();
        let body = test::call_and_read_body(&app, anonymous).await;
        assert_eq!(body, web::Bytes::from_static(b"anonymous"));

        let broken = test::TestRequest::get()
            .uri("/public")
            .insert_header(bearer("not-a-jwt"))
            .to_request();
        let body = test::call_and_read_body(&app, broken).await;
        assert_eq!(body, web::Bytes::from_static(b"anonymous"));
    }
}
