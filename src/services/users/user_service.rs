//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 등록, 조회, 목록, 삭제와 로그인 시 자격 증명 확인을 담당합니다.
//! Spring의 `UserService` + `UserDetailsService` 역할을 하나로 묶은 형태입니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ dyn UserRepository ──▶ MongoDB (운영) / 메모리 (테스트)
//! ```
//!
//! 저장소는 생성자로 주입받습니다. `main`에서 한 번 만들어 `web::Data`로 등록합니다.
//!
//! ```rust,ignore
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db));
//! let user_service = web::Data::new(UserService::new(repo, PasswordConfig::bcrypt_cost()));
//! ```

use std::sync::Arc;

use bcrypt::{hash, verify};
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::{CreateUserRequest, ListUsersQuery};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::repositories::users::{UserFilter, UserRepository};
use crate::response::calculate_pagination;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 메서드는 `AppResult<T>`를 반환합니다.
///
/// - **ConflictError**: 이메일/사용자명 중복
/// - **NotFound**: 사용자가 없음
/// - **AuthenticationError**: 로그인 실패, 비활성 계정
/// - **InternalError**: 해싱 실패 등 시스템 오류
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { user_repo, bcrypt_cost }
    }

    /// 새 사용자 계정 생성
    ///
    /// 이메일은 소문자로 정규화해서 저장합니다. 중복 검사는 저장 전에 한 번 하고,
    /// 동시에 들어온 요청은 저장소의 고유 인덱스가 다시 막습니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();
        let email = request.email.trim().to_lowercase();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("Email already in use".to_string()));
        }

        if self.user_repo.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::ConflictError("Username already taken".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(email, request.username, request.display_name, password_hash);
        let created = self.user_repo.create(user).await?;

        log::info!(
            "👤 사용자 생성: {} ({:?})",
            created.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created))
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.find_user(id).await?;
        Ok(UserResponse::from(user))
    }

    /// 조건에 맞는 사용자 한 페이지와 전체 개수
    ///
    /// 범위를 벗어난 페이지는 마지막 페이지로 맞춰서 조회합니다.
    pub async fn list_users(&self, query: &ListUsersQuery) -> AppResult<(Vec<UserResponse>, u64)> {
        let filter = UserFilter {
            role: query.role.clone(),
            search: query.search.clone(),
            is_active: query.is_active,
        };

        let total = self.user_repo.count(&filter).await?;
        let pagination = calculate_pagination(total, query.page, query.limit);

        let users = self
            .user_repo
            .list(&filter, pagination.offset(), pagination.per_page as i64)
            .await?;

        log::debug!(
            "사용자 목록 조회: {}건 / 전체 {}건 (page {})",
            users.len(),
            total,
            pagination.current_page
        );

        Ok((users.into_iter().map(UserResponse::from).collect(), total))
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        if !self.user_repo.delete(&object_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        log::info!("🗑️ 사용자 삭제: {}", id);
        Ok(())
    }

    /// 이메일/비밀번호 확인
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 거절합니다.
    /// 성공하면 마지막 로그인 시각을 갱신한 사용자를 반환합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let email = email.trim().to_lowercase();

        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = verify(password, &user.password_hash).context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🔒 로그인 실패: {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            log::warn!("🔒 비활성 계정 로그인 시도: {}", email);
            return Err(AppError::AuthenticationError("Account is disabled".to_string()));
        }

        if let Some(id) = user.id {
            let now = DateTime::now();
            self.user_repo.touch_last_login(&id, now).await?;
            user.last_login_at = Some(now);
            user.updated_at = now;
        }

        log::info!("🔓 로그인 성공: {}", user.username);
        Ok(user)
    }

    /// 토큰 갱신용. 삭제되었거나 비활성화된 사용자는 인증 실패로 처리합니다.
    pub async fn find_active_user(&self, id: &str) -> AppResult<User> {
        let user = self
            .find_user(id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::AuthenticationError("User no longer exists".to_string()),
                other => other,
            })?;

        if !user.is_active {
            return Err(AppError::AuthenticationError("Account is disabled".to_string()));
        }

        Ok(user)
    }

    async fn find_user(&self, id: &str) -> AppResult<User> {
        let object_id = parse_user_id(id)?;

        self.user_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

/// 형식이 틀린 ID는 존재하지 않는 사용자와 같게 취급
fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound("User not found".to_string()))
}
