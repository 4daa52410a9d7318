//! Menu item repository trait (port)

use async_trait::async_trait;

use crate::domain::MenuItem;
use crate::error::DomainError;

/// Read access to stored menu entries.
///
/// `fetch_by_menu` must load every entry of the named menu in ONE query,
/// ordered by `(sort_order, id)` ascending, so that render cost stays
/// independent of tree depth and width. A menu with no entries (or an
/// unknown menu name) yields an empty list, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn fetch_by_menu(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError>;
}
