//! 사용자 저장소
//!
//! 서비스 계층은 [`UserRepository`] trait에만 의존하고, 실제 구현은 `main`에서 주입합니다.
//! 운영 환경에서는 [`MongoUserRepository`], 테스트에서는 메모리 구현을 사용합니다.
//!
//! | Spring Data | 이 시스템 |
//! |-------------|-----------|
//! | `interface UserRepository extends MongoRepository` | `trait UserRepository` |
//! | `@Repository class` | `MongoUserRepository` |
//! | `Pageable` | `skip` / `limit` 인자 |

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// 이 역할을 가진 사용자만
    pub role: Option<String>,
    /// 이메일, 사용자명, 표시 이름 부분 일치 (대소문자 무시)
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl UserFilter {
    /// 메모리 구현과 MongoDB 필터가 같은 의미를 갖도록 하는 기준 구현
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = &self.role {
            if !user.roles.iter().any(|r| r == role) {
                return false;
            }
        }

        if let Some(is_active) = self.is_active {
            if user.is_active != is_active {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = [&user.email, &user.username, &user.display_name]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }

    /// MongoDB 쿼리 문서로 변환. 검색어는 정규식 메타 문자를 이스케이프합니다.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(role) = &self.role {
            filter.insert("roles", role.as_str());
        }

        if let Some(is_active) = self.is_active {
            filter.insert("is_active", is_active);
        }

        if let Some(search) = &self.search {
            let pattern = regex::escape(search);
            let fields = ["email", "username", "display_name"]
                .iter()
                .map(|field| {
                    let mut clause = Document::new();
                    clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                    clause
                })
                .collect::<Vec<_>>();
            filter.insert("$or", fields);
        }

        filter
    }
}

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장. 이메일/사용자명이 겹치면 `ConflictError`.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 생성 시각 내림차순 목록
    async fn list(&self, filter: &UserFilter, skip: u64, limit: i64) -> AppResult<Vec<User>>;

    async fn count(&self, filter: &UserFilter) -> AppResult<u64>;

    /// 삭제 여부를 반환
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    async fn touch_last_login(&self, id: &ObjectId, at: DateTime) -> AppResult<()>;
}

/// MongoDB 기반 사용자 저장소
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 고유 인덱스 생성 (애플리케이션 시작 시 한 번)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).name("email_unique".to_string()).build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).name("username_unique".to_string()).build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder().name("created_at_desc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("Email or username already in use".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn list(&self, filter: &UserFilter, skip: u64, limit: i64) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(filter.to_document())
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self, filter: &UserFilter) -> AppResult<u64> {
        self.collection()
            .count_documents(filter.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn touch_last_login(&self, id: &ObjectId, at: DateTime) -> AppResult<()> {
        self.collection()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "last_login_at": at, "updated_at": at } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
