// ============================================================================
// Menu API Server - PostgreSQL Menu Item Repository
// File: crates/menu-api-server/src/database/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i64,
    pub guid: Uuid,
    pub menu_name: String,
    pub title: String,
    pub parent_id: Option<i64>,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            guid: row.guid,
            menu_name: row.menu_name,
            title: row.title,
            parent_id: row.parent_id,
            url: row.url,
            named_url: row.named_url,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn fetch_by_menu(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        // One bulk query per render; children are never fetched lazily.
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                id, guid, menu_name, title, parent_id,
                url, named_url, sort_order, created_at, updated_at
            FROM menu_items
            WHERE menu_name = $1
            ORDER BY sort_order, id
            "#,
        )
        .bind(menu_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menu '{}': {}", menu_name, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Fetched {} entries for menu '{}'", rows.len(), menu_name);

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
