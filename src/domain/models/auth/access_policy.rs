//! 라우트별 접근 정책
//!
//! `AuthMiddleware`가 토큰 유무와 역할 조건을 판단할 때 사용합니다.
//! Spring Security의 `.authenticated()` / `.permitAll()` / `.hasAnyRole()`에 대응합니다.

use super::AuthenticatedUser;

/// 토큰이 없을 때의 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 401
    Required,
    /// 토큰이 있으면 사용자 정보를 넣고, 없어도 요청을 진행
    Optional,
}

/// 접근에 필요한 역할
#[derive(Debug, Clone)]
pub enum RequiredRole {
    Single(String),
    /// 나열된 역할 중 하나
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn any_of(roles: &[&str]) -> Self {
        RequiredRole::Any(roles.iter().map(|r| r.to_string()).collect())
    }

    pub fn allows(&self, user: &AuthenticatedUser) -> bool {
        match self {
            RequiredRole::Single(role) => user.has_role(role),
            RequiredRole::Any(roles) => {
                let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
                user.has_any_role(&roles)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{ROLE_ADMIN, ROLE_USER};

    fn member(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "65a5f0c2e4b0a1b2c3d4e5f6".to_string(),
            email: "writer@example.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_role() {
        let admin_only = RequiredRole::Single(ROLE_ADMIN.to_string());

        assert!(admin_only.allows(&member(&[ROLE_USER, ROLE_ADMIN])));
        assert!(!admin_only.allows(&member(&[ROLE_USER])));
    }

    #[test]
    fn test_any_role() {
        let editors = RequiredRole::any_of(&[ROLE_ADMIN, "editor"]);

        assert!(editors.allows(&member(&["editor"])));
        assert!(!editors.allows(&member(&[ROLE_USER])));
        assert!(!editors.allows(&member(&[])));
    }
}
