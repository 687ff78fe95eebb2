//! 인증된 사용자 추출기
//!
//! `AuthMiddleware`가 토큰을 검증한 뒤 Request Extensions에 넣어 둔 값을
//! 핸들러 파라미터로 꺼냅니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! pub async fn get_current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     // user.user_id, user.roles
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::ROLE_ADMIN;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::AuthenticationError("Authentication required".to_string()).into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "65a5f0c2e4b0a1b2c3d4e5f6".to_string(),
            email: "jane@example.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_authenticated_user_has_role() {
        let admin = user(&["user", "admin"]);

        assert!(admin.has_role("admin"));
        assert!(admin.has_any_role(&["moderator", "admin"]));
        assert!(admin.is_admin());
        assert!(!user(&["user"]).is_admin());
    }

    #[actix_web::test]
    async fn test_extractor_reads_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(user(&["user"]));

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted.email, "jane@example.com");
    }

    #[actix_web::test]
    async fn test_extractor_rejects_anonymous_request() {
        let req = TestRequest::default().to_http_request();
        let err = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert_eq!(err.as_response_error().status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
