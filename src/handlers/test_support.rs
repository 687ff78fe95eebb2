//! 핸들러 테스트용 애플리케이션 구성

use std::sync::Arc;

use actix_web::web;
use chrono::Duration;

use crate::domain::entities::users::{User, ROLE_ADMIN};
use crate::domain::models::token::TokenPair;
use crate::repositories::users::{InMemoryUserRepository, UserRepository};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

pub const TEST_PASSWORD: &str = "Password123";

pub struct TestContext {
    pub repo: Arc<InMemoryUserRepository>,
    pub user_service: web::Data<UserService>,
    pub token_service: web::Data<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryUserRepository::new());

        Self {
            user_service: web::Data::new(UserService::new(repo.clone(), 4)),
            token_service: web::Data::new(TokenService::new(
                "handler-test-secret",
                Duration::hours(1),
                Duration::days(7),
            )),
            repo,
        }
    }

    /// 저장소에 직접 사용자를 넣고 토큰을 발급
    pub async fn seed_user(&self, email: &str, username: &str, admin: bool) -> (User, TokenPair) {
        let password_hash = bcrypt::hash(TEST_PASSWORD, 4).unwrap();
        let mut user = User::new(email.to_string(), username.to_string(), username.to_string(), password_hash);
        if admin {
            user.roles.push(ROLE_ADMIN.to_string());
        }

        let user = self.repo.create(user).await.unwrap();
        let tokens = self.token_service.generate_token_pair(&user).unwrap();
        (user, tokens)
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// 라우트와 `ErrorEnvelope`만 등록한 테스트 서비스
///
/// CORS, Rate Limit까지 포함한 전체 구성은 `app::build_app` 테스트에서 다룹니다.
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::routes::json_config())
                .app_data($ctx.user_service.clone())
                .app_data($ctx.token_service.clone())
                .wrap($crate::middlewares::ErrorEnvelope)
                .configure($crate::routes::configure_all_routes)
                .default_service(actix_web::web::to($crate::routes::not_found)),
        )
        .await
    };
}
