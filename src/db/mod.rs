//! MongoDB 연결 관리
//!
//! `main`에서 한 번 만들고 `Arc`로 공유하는 데이터베이스 핸들입니다.
//! 리포지토리는 이 핸들을 생성자로 주입받습니다.
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?);
//! let user_repo = MongoUserRepository::new(database.clone()).await?;
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::core::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    pub async fn new(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("blog_api".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
