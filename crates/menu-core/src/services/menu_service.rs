// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Orchestrates one menu render: fetch, resolve, assemble, annotate, render.

use std::sync::Arc;

use tracing::debug;

use crate::error::DomainError;
use crate::render::render_menu;
use crate::repositories::MenuItemRepository;
use crate::resolver::UrlResolver;
use crate::tree::{annotate, build_forest, resolve_active_path, resolve_urls};

/// Renders named menus against the current request path.
///
/// Each call works on a freshly fetched snapshot of entries; nothing is
/// shared or retained across renders.
pub struct MenuService {
    repository: Arc<dyn MenuItemRepository>,
    resolver: Arc<dyn UrlResolver>,
}

impl MenuService {
    pub fn new(repository: Arc<dyn MenuItemRepository>, resolver: Arc<dyn UrlResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Render the named menu as a nested HTML fragment.
    ///
    /// Degrades to an empty string when the request path is absent or the
    /// menu is unknown or empty. Only repository failures propagate; every
    /// data-quality problem (unresolvable named urls, dangling parents,
    /// cycles) still produces markup.
    pub async fn draw_menu(
        &self,
        menu_name: &str,
        current_path: &str,
    ) -> Result<String, DomainError> {
        if current_path.is_empty() {
            debug!("No request path for menu '{}', rendering nothing", menu_name);
            return Ok(String::new());
        }

        // One bulk fetch per render, regardless of tree depth or width.
        let items = self.repository.fetch_by_menu(menu_name).await?;
        if items.is_empty() {
            debug!("Menu '{}' is empty or unknown", menu_name);
            return Ok(String::new());
        }

        let urls = resolve_urls(&items, self.resolver.as_ref());
        let forest = build_forest(&items);
        let path = resolve_active_path(&items, &urls, current_path);
        let roots = annotate(&items, &urls, &forest, &path);

        debug!(
            "Rendering menu '{}': {} items, active item: {:?}",
            menu_name,
            items.len(),
            path.active_id
        );

        Ok(render_menu(&roots))
    }
}
