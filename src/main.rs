//! 블로그 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 만들고, 서비스들을 직접 생성해 `web::Data`로 등록합니다.

use std::io;
use std::sync::Arc;

use actix_governor::GovernorConfigBuilder;
use actix_web::{web, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use blog_api_backend::app::{build_app, AppState};
use blog_api_backend::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};
use blog_api_backend::db::Database;
use blog_api_backend::domain::dto::verify_schemas;
use blog_api_backend::repositories::users::{MongoUserRepository, UserRepository};
use blog_api_backend::services::auth::TokenService;
use blog_api_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // RUST_LOG도 환경 파일에서 올 수 있으므로 로거보다 먼저 로드
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(loaded) => info!("📄 환경 파일 로드 됨: {}", loaded),
        Err(e) => error!("환경 파일 로드 실패, 프로세스 환경 변수만 사용: {}", e),
    }

    let environment = Environment::current();
    info!("🚀 블로그 API 서비스 시작중... ({:?})", environment);

    if environment.is_production() && !JwtConfig::has_secret() {
        error!("❌ 운영 환경에서는 JWT_SECRET 설정이 필요합니다");
        return Err(io::Error::other("JWT_SECRET is not set"));
    }

    // 요청 스키마는 처음 쓰일 때 만들어지므로, 잘못 선언된 규칙은 여기서 먼저 드러나게 함
    verify_schemas().map_err(|e| io::Error::other(format!("요청 스키마 구성 실패: {}", e)))?;

    let user_repo = initialize_data_store().await?;

    let user_service = web::Data::new(UserService::new(user_repo, PasswordConfig::bcrypt_cost()));
    let token_service = web::Data::new(TokenService::from_config());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 구성은 [`build_app`]에 있습니다.
async fn start_http_server(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/api/v1/openapi.json", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let rate_limit = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("🔗 CORS 허용 Origin: {:?}", allowed_origins);

    let state = AppState {
        user_service,
        token_service,
        rate_limit,
        allowed_origins: Arc::from(allowed_origins),
    };

    HttpServer::new(move || build_app(state.clone()))
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let path = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod")?,
        "dev" => dotenv::from_filename(".env.dev")?,
        _ => dotenv()?,
    };

    Ok(format!("{} (PROFILE={})", path.display(), profile))
}

/// `RUST_LOG`가 없으면 `info,actix_web=info`
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 연결과 사용자 저장소 초기화
async fn initialize_data_store() -> io::Result<Arc<dyn UserRepository>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name())
        .await
        .map_err(|e| {
            error!("❌ MongoDB 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let repo = MongoUserRepository::new(Arc::new(database));
    repo.create_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    info!("✅ 사용자 저장소 준비 완료");
    Ok(Arc::new(repo))
}
