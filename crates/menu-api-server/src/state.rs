use std::sync::Arc;

use menu_core::MenuService;
use sqlx::PgPool;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub db_pool: PgPool,
}
