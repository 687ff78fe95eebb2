//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthMode, AuthenticatedUser, RequiredRole};
use crate::domain::models::token::TokenType;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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
        let mode = self.mode;
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let auth_result = authenticate(&req);

            match (&mode, auth_result) {
                (AuthMode::Required, Err(err)) => {
                    log::warn!("🔒 인증 실패 [{}]: {}", req.path(), err);
                    return Ok(reject(req, AppError::AuthenticationError("Authentication required".to_string())));
                }
                (AuthMode::Required, Ok(user)) => {
                    if let Some(required) = &required_role {
                        if !required.allows(&user) {
                            log::warn!(
                                "🚫 권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                                user.user_id,
                                user.roles,
                                required
                            );
                            return Ok(reject(req, AppError::AuthorizationError("Insufficient permissions".to_string())));
                        }
                    }

                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(user)) => {
                    let allowed = required_role
                        .as_ref()
                        .is_none_or(|required| required.allows(&user));

                    if allowed {
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                    }
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 거절 응답을 실패 래퍼로 만들어 요청을 종료
fn reject<B>(req: ServiceRequest, error: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = error.to_envelope_response(req.path());
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 요청에서 액세스 토큰을 꺼내 검증
fn authenticate(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token, TokenType::Access)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
        roles: claims.roles,
    })
}
