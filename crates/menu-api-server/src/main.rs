use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use menu_api_server::config::Settings;
use menu_api_server::database::{create_pool, PgMenuItemRepository};
use menu_api_server::routes::StaticRouteTable;
use menu_api_server::{build_router, AppState};
use menu_core::MenuService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,menu_api_server=debug".to_string()),
        )
        .with_target(true)
        .init();

    info!("Starting menu API server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Initialize database pool
    let db_pool = create_pool(&settings.database).await?;
    info!("Database connection established");

    // Wire the menu service against its ports
    let repository = Arc::new(PgMenuItemRepository::new(db_pool.clone()));
    let route_table = Arc::new(StaticRouteTable::new(settings.routes.clone()));
    let menu_service = Arc::new(MenuService::new(repository, route_table));

    let state = AppState {
        menu_service,
        db_pool,
    };
    let app = build_router(state);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
