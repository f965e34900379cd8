use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use session_api::AppState;
use session_core::repositories::MemberRepository;
use session_core::services::LoginService;
use session_core::Member;
use session_infrastructure::MemoryMemberRepository;
use session_shared::config::{AppConfig, SeedSettings};
use session_store::{Reaper, SessionStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    session_shared::telemetry::init_telemetry();

    info!("Session server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Members
    let member_repo = Arc::new(MemoryMemberRepository::new());
    seed_member(member_repo.as_ref(), &config.seed).await?;
    let login_service = Arc::new(LoginService::new(member_repo));

    // Session store
    let mut store_config = StoreConfig::default().with_reap_interval(config.session.reap_interval());
    if let Some(timeout) = config.session.idle_timeout() {
        store_config = store_config.with_idle_timeout(timeout);
    }
    let sessions = Arc::new(SessionStore::<Member>::with_config(&store_config));
    let _reaper = Reaper::new(sessions.clone(), &store_config).spawn();

    let state = AppState::new(sessions, login_service, &config.session);
    let app = session_api::router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_member(repo: &dyn MemberRepository, seed: &SeedSettings) -> anyhow::Result<()> {
    if !seed.enabled {
        return Ok(());
    }
    let member = Member::new(&seed.login_id, &seed.name, &seed.password)?;
    let saved = repo.save(member).await?;
    info!("Seeded member {} (login id: {})", saved.id, saved.login_id);
    Ok(())
}
