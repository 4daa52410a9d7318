//! Transient view model produced for one render.

use serde::Serialize;

/// Annotated menu node. Built from a [`MenuItem`](super::MenuItem) during
/// annotation, consumed by the renderer, and discarded after the render.
/// The stored entity is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MenuNode {
    pub id: i64,
    pub title: String,
    /// Resolved link target (literal url, reversed named url, or the
    /// unresolved placeholder).
    pub url: String,
    pub is_active: bool,
    pub is_in_path: bool,
    pub has_children: bool,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// CSS classes for this node's list item: "active" when it matches the
    /// request path, "has-children" when it has children, "expanded" when
    /// its children are on the active path.
    pub fn css_classes(&self) -> String {
        let mut classes = Vec::new();
        if self.is_active {
            classes.push("active");
        }
        if self.has_children {
            classes.push("has-children");
            if self.is_in_path {
                classes.push("expanded");
            }
        }
        classes.join(" ")
    }

    /// Whether this node's child container is rendered visible: branches on
    /// the active path are open, and the children of the active entry itself
    /// are open one level down.
    pub fn should_show_children(&self, parent_is_active: bool) -> bool {
        self.is_in_path || parent_is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(is_active: bool, is_in_path: bool, has_children: bool) -> MenuNode {
        MenuNode {
            id: 1,
            title: "Parent".to_string(),
            url: "/parent/".to_string(),
            is_active,
            is_in_path,
            has_children,
            children: Vec::new(),
        }
    }

    #[test]
    fn css_classes_active_with_children() {
        let classes = node(true, false, true).css_classes();
        assert!(classes.contains("active"));
        assert!(classes.contains("has-children"));
        assert!(!classes.contains("expanded"));
    }

    #[test]
    fn css_classes_expanded() {
        let classes = node(false, true, true).css_classes();
        assert!(classes.contains("has-children"));
        assert!(classes.contains("expanded"));
    }

    #[test]
    fn expanded_requires_children() {
        // An in-path leaf is never marked expanded.
        let classes = node(false, true, false).css_classes();
        assert!(!classes.contains("expanded"));
        assert!(!classes.contains("has-children"));
    }

    #[test]
    fn shows_children_when_in_path() {
        assert!(node(false, true, true).should_show_children(false));
    }

    #[test]
    fn shows_children_when_parent_active() {
        assert!(node(false, false, true).should_show_children(true));
    }

    #[test]
    fn hides_children_off_path() {
        assert!(!node(false, false, true).should_show_children(false));
    }
}
