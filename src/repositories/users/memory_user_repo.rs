//! 테스트용 메모리 사용자 저장소

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;

use super::user_repo::{UserFilter, UserRepository};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if users.iter().any(|u| u.email == user.email || u.username == user.username) {
            return Err(AppError::ConflictError("Email or username already in use".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self, filter: &UserFilter, skip: u64, limit: i64) -> AppResult<Vec<User>> {
        let mut matched: Vec<User> = self.read()?.iter().filter(|u| filter.matches(u)).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matched
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, filter: &UserFilter) -> AppResult<u64> {
        Ok(self.read()?.iter().filter(|u| filter.matches(u)).count() as u64)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut users = self.write()?;
        let before = users.len();
        users.retain(|u| u.id.as_ref() != Some(id));
        Ok(users.len() < before)
    }

    async fn touch_last_login(&self, id: &ObjectId, at: DateTime) -> AppResult<()> {
        if let Some(user) = self.write()?.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            user.last_login_at = Some(at);
            user.updated_at = at;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, username: &str) -> User {
        User::new(email.to_string(), username.to_string(), "Writer".to_string(), "h".to_string())
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(user("jane@example.com", "jane_doe")).await.unwrap();
        let id = created.id.unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().username, "jane_doe");

        let duplicate = repo.create(user("jane@example.com", "someone_else")).await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_list_applies_skip_and_limit() {
        let repo = InMemoryUserRepository::new();
        for i in 0..7 {
            repo.create(user(&format!("w{i}@example.com"), &format!("writer_{i}"))).await.unwrap();
        }

        let filter = UserFilter::default();
        assert_eq!(repo.count(&filter).await.unwrap(), 7);
        assert_eq!(repo.list(&filter, 5, 5).await.unwrap().len(), 2);
        assert!(repo.list(&filter, 10, 5).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_and_touch_last_login() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(user("jane@example.com", "jane_doe")).await.unwrap().id.unwrap();

        let now = DateTime::now();
        repo.touch_last_login(&id, now).await.unwrap();
        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().last_login_at, Some(now));

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_by_email("jane@example.com").await.unwrap().is_none());
    }
}
