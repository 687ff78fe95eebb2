//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// 사용자 엔티티
///
/// 이메일/비밀번호로 가입한 사용자를 표현합니다.
/// 응답으로 내보낼 때는 반드시 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로
/// 변환해서 비밀번호 해시가 노출되지 않게 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub username: String,
    pub display_name: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성. 기본 역할은 `user`입니다.
    pub fn new(email: String, username: String, display_name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            display_name,
            password_hash,
            is_active: true,
            roles: vec![ROLE_USER.to_string()],
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID를 16진수 문자열로 반환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ROLE_ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "jane@example.com".to_string(),
            "jane_doe".to_string(),
            "Jane".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(user.is_active);
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }
}
