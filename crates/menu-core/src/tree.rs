// ============================================================================
// Menu Core - Tree Assembly & Active Path
// File: crates/menu-core/src/tree.rs
// Description: Forest reconstruction, active-path resolution, annotation
// ============================================================================
//! Rebuilds the menu forest from a flat entry list and computes the active
//! path for the current request.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{MenuItem, MenuNode};
use crate::resolver::{UrlResolver, UNRESOLVED_URL};

/// Parent/child structure of one menu, as id indices into the flat list.
///
/// Both `roots` and every children list preserve the input order, which the
/// repository guarantees is `(sort_order, id)` ascending. The builder never
/// re-sorts.
#[derive(Debug, Default)]
pub struct Forest {
    pub roots: Vec<i64>,
    pub children: HashMap<i64, Vec<i64>>,
}

/// Partition entries into roots and a parent-id multimap in one pass.
///
/// Dangling or cyclic `parent_id` values are not validated here; entries
/// whose parent never materializes simply stay unreachable from any root.
pub fn build_forest(items: &[MenuItem]) -> Forest {
    let mut forest = Forest::default();

    for item in items {
        match item.parent_id {
            None => forest.roots.push(item.id),
            Some(parent_id) => forest.children.entry(parent_id).or_default().push(item.id),
        }
    }

    forest
}

/// The entry matching the current request path, plus its ancestor chain.
#[derive(Debug, Default)]
pub struct ActivePath {
    pub active_id: Option<i64>,
    /// The active entry's own id and every ancestor id up to a root.
    pub ancestor_ids: HashSet<i64>,
}

/// Resolve every entry's link target once, keyed by id.
pub fn resolve_urls(items: &[MenuItem], resolver: &dyn UrlResolver) -> HashMap<i64, String> {
    items
        .iter()
        .map(|item| (item.id, item.resolved_url(resolver)))
        .collect()
}

/// Find the active entry (first flat-order entry whose resolved url equals
/// `current_path` exactly) and collect its ancestor chain.
///
/// The parent walk keeps a visited set so a corrupted cycle ends the chain
/// at the first repeated id instead of looping.
pub fn resolve_active_path(
    items: &[MenuItem],
    urls: &HashMap<i64, String>,
    current_path: &str,
) -> ActivePath {
    let active = items
        .iter()
        .find(|item| urls.get(&item.id).is_some_and(|url| url == current_path));

    let Some(active) = active else {
        return ActivePath::default();
    };

    let by_id: HashMap<i64, &MenuItem> = items.iter().map(|item| (item.id, item)).collect();

    let mut ancestor_ids = HashSet::new();
    let mut current = Some(active);
    while let Some(item) = current {
        if !ancestor_ids.insert(item.id) {
            debug!(
                "cycle in parent chain of menu '{}' at item {}",
                item.menu_name, item.id
            );
            break;
        }
        current = item.parent_id.and_then(|pid| by_id.get(&pid).copied());
    }

    ActivePath {
        active_id: Some(active.id),
        ancestor_ids,
    }
}

/// Build the annotated node tree for every entry reachable from a root.
///
/// Entries with a dangling parent reference are unreachable and therefore
/// dropped from the output.
pub fn annotate(
    items: &[MenuItem],
    urls: &HashMap<i64, String>,
    forest: &Forest,
    path: &ActivePath,
) -> Vec<MenuNode> {
    let by_id: HashMap<i64, &MenuItem> = items.iter().map(|item| (item.id, item)).collect();

    forest
        .roots
        .iter()
        .filter_map(|id| build_node(*id, &by_id, urls, forest, path))
        .collect()
}

fn build_node(
    id: i64,
    by_id: &HashMap<i64, &MenuItem>,
    urls: &HashMap<i64, String>,
    forest: &Forest,
    path: &ActivePath,
) -> Option<MenuNode> {
    let item = by_id.get(&id)?;

    let children: Vec<MenuNode> = forest
        .children
        .get(&id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child_id| build_node(*child_id, by_id, urls, forest, path))
                .collect()
        })
        .unwrap_or_default();

    Some(MenuNode {
        id,
        title: item.title.clone(),
        url: urls
            .get(&id)
            .cloned()
            .unwrap_or_else(|| UNRESOLVED_URL.to_string()),
        is_active: path.active_id == Some(id),
        is_in_path: path.ancestor_ids.contains(&id),
        has_children: !children.is_empty(),
        children,
    })
}
