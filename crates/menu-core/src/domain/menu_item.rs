// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Stored menu entry belonging to a named menu
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resolver::{UrlResolver, UNRESOLVED_URL};

/// One entry of a named menu. Entries sharing a `menu_name` form a forest
/// through `parent_id`; siblings are ordered by `sort_order` ascending with
/// ties broken by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub guid: Uuid,
    pub menu_name: String,
    pub title: String,
    pub parent_id: Option<i64>,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub sort_order: i32,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Resolve the link target for this entry.
    ///
    /// A non-empty `named_url` wins and is looked up through the resolver,
    /// degrading to [`UNRESOLVED_URL`] when the name is unknown. Otherwise
    /// the literal `url` is used verbatim, or the placeholder when both
    /// fields are empty.
    pub fn resolved_url(&self, resolver: &dyn UrlResolver) -> String {
        if let Some(name) = self.named_url.as_deref().filter(|n| !n.is_empty()) {
            return resolver
                .resolve_named(name)
                .unwrap_or_else(|| UNRESOLVED_URL.to_string());
        }

        match self.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => UNRESOLVED_URL.to_string(),
        }
    }
}
