//! 레시피 커뮤니티 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB, Redis 에 연결한 뒤 모든 서비스를 만들어
//! `web::Data` 로 등록하고 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use recipe_community_backend::caching::redis::RedisClient;
use recipe_community_backend::config::{AppConfig, ProviderConfig, StateBackend};
use recipe_community_backend::db::Database;
use recipe_community_backend::repositories::community::{
    CategoryRepository, CommentRepository, IngredientRepository, PostRepository,
};
use recipe_community_backend::repositories::oauth::{
    InMemoryStateStore, RedisStateStore, StateStore,
};
use recipe_community_backend::repositories::users::{UserRepository, UserStore};
use recipe_community_backend::routes::configure_all_routes;
use recipe_community_backend::services::auth::{
    AccountResolver, OAuthContext, OAuthFlow, ProviderClient, SessionCookiePolicy, StateService,
    TokenService,
};
use recipe_community_backend::services::community::{
    CategoryService, CommentService, IngredientService, PostService, UploadService,
};
use recipe_community_backend::services::users::UserService;

/// 요청 핸들러에 주입되는 서비스 묶음
#[derive(Clone)]
struct AppServices {
    tokens: TokenService,
    users: UserService,
    oauth: OAuthContext,
    posts: PostService,
    comments: CommentService,
    categories: CategoryService,
    ingredients: IngredientService,
    uploads: UploadService,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 레시피 커뮤니티 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let services = initialize_services(&config).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서: Rate Limiting → CORS → 요청 로그 → 경로 정규화
async fn start_http_server(config: AppConfig, services: AppServices) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND 와 RATE_LIMIT_BURST_SIZE 는 0 보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let mut allowed_origins = vec![config.frontend_url.clone()];
    allowed_origins.extend(config.cors_origins.iter().cloned());

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(services.tokens.clone()))
            .app_data(web::Data::new(services.users.clone()))
            .app_data(web::Data::new(services.oauth.clone()))
            .app_data(web::Data::new(services.posts.clone()))
            .app_data(web::Data::new(services.comments.clone()))
            .app_data(web::Data::new(services.categories.clone()))
            .app_data(web::Data::new(services.ingredients.clone()))
            .app_data(web::Data::new(services.uploads.clone()))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(config.server.workers)
    .run()
    .await
}

/// 저장소에 연결하고 서비스 그래프를 만듭니다
///
/// 각 서비스는 필요한 저장소와 설정만 생성자로 받습니다.
async fn initialize_services(config: &AppConfig) -> Result<AppServices, String> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database)
        .await
        .map_err(|e| format!("MongoDB 연결 실패: {}", e))?;

    let redis = RedisClient::connect(&config.redis_url)
        .await
        .map_err(|e| format!("Redis 연결 실패: {}", e))?;
    info!("✅ Redis 연결 성공");

    let user_repo = UserRepository::new(database.clone(), redis.clone());
    let posts = PostRepository::new(database.clone());
    let comments = CommentRepository::new(database.clone());
    let categories = CategoryRepository::new(database.clone());
    let ingredients = IngredientRepository::new(database);

    user_repo.create_indexes().await.map_err(|e| e.to_string())?;
    posts.create_indexes().await.map_err(|e| e.to_string())?;
    comments.create_indexes().await.map_err(|e| e.to_string())?;
    categories.create_indexes().await.map_err(|e| e.to_string())?;
    ingredients.create_indexes().await.map_err(|e| e.to_string())?;

    let state_store: Arc<dyn StateStore> = match config.oauth.state_backend {
        StateBackend::Redis => Arc::new(RedisStateStore::new(redis)),
        StateBackend::Memory => {
            info!("OAuth state 를 메모리에 저장합니다 (단일 인스턴스 전용)");
            Arc::new(InMemoryStateStore::new())
        }
    };
    let user_store: Arc<dyn UserStore> = Arc::new(user_repo);

    let tokens = TokenService::new(config.jwt.clone());
    let users = UserService::new(user_store.clone(), config.password.bcrypt_cost)
        .map_err(|e| e.to_string())?;

    let states = StateService::new(state_store, config.oauth.state_ttl_secs);
    let resolver = AccountResolver::new(user_store);

    let flow = |provider_config: ProviderConfig| -> Result<OAuthFlow, String> {
        let client = ProviderClient::new(provider_config, config.oauth.http_timeout())
            .map_err(|e| e.to_string())?;
        Ok(OAuthFlow::new(
            client,
            states.clone(),
            resolver.clone(),
            tokens.clone(),
            config.frontend_url.clone(),
        ))
    };

    let oauth = OAuthContext {
        google: flow(config.google.clone())?,
        naver: flow(config.naver.clone())?,
        cookie: SessionCookiePolicy {
            secure: config.oauth.secure_cookies,
            max_age_secs: config.oauth.state_ttl_secs,
        },
    };

    Ok(AppServices {
        tokens,
        users,
        oauth,
        posts: PostService::new(posts.clone(), comments.clone(), categories.clone()),
        comments: CommentService::new(comments, posts),
        categories: CategoryService::new(categories),
        ingredients: IngredientService::new(ingredients),
        uploads: UploadService::new(config.media.clone()),
    })
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=recipe_community_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 주소와 `CORS_ALLOWED_ORIGINS` 의 주소만 허용하며,
/// OAuth 세션 쿠키 때문에 자격 증명을 지원합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| {
            cors.allowed_origin(origin.trim_end_matches('/'))
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
