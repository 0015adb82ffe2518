use std::path::Path;

use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration: the TOML file at `CONFIG_PATH` (default
/// `config.toml`) when present, environment variables otherwise.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        info!(%path, "loading configuration file");
        return AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()));
    }
    warn!(%path, "configuration file not found, falling back to environment");
    let mut cfg = AppConfig::from_env();
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Connect, migrate and serve until the listener fails.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    }

    let state = ServerState::with_db(db);
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    info!(%addr, "starting student api");
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
