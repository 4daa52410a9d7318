// ============================================================================
// Menu Core - Markup Renderer
// File: crates/menu-core/src/render.rs
// Description: Recursive nested-list rendering with expand/collapse policy
// ============================================================================
//! Serializes an annotated menu forest to nested `<ul>`/`<li>` markup.
//!
//! Collapsed branches are still emitted, with their container marked
//! `display: none;` so client-side code can toggle them without another
//! round trip.

use crate::domain::MenuNode;

/// Render the forest. The outermost container is always visible.
pub fn render_menu(roots: &[MenuNode]) -> String {
    render_tree(roots, false, false)
}

fn render_tree(nodes: &[MenuNode], parent_is_active: bool, hidden: bool) -> String {
    if nodes.is_empty() {
        return String::new();
    }

    let mut html = String::from(if hidden {
        r#"<ul style="display: none;">"#
    } else {
        "<ul>"
    });

    for node in nodes {
        let classes = node.css_classes();
        if classes.is_empty() {
            html.push_str("<li>");
        } else {
            html.push_str(&format!(r#"<li class="{classes}">"#));
        }

        html.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            escape(&node.url),
            escape(&node.title)
        ));

        if node.has_children {
            let show = node.should_show_children(parent_is_active);
            html.push_str(&render_tree(&node.children, node.is_active, !show));
        }

        html.push_str("</li>");
    }

    html.push_str("</ul>");
    html
}

/// Minimal escaping for text content and attribute values.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: i64, title: &str, url: &str) -> MenuNode {
        MenuNode {
            id,
            title: title.to_string(),
            url: url.to_string(),
            is_active: false,
            is_in_path: false,
            has_children: false,
            children: Vec::new(),
        }
    }

    fn branch(id: i64, title: &str, url: &str, children: Vec<MenuNode>) -> MenuNode {
        MenuNode {
            id,
            title: title.to_string(),
            url: url.to_string(),
            is_active: false,
            is_in_path: false,
            has_children: !children.is_empty(),
            children,
        }
    }

    #[test]
    fn empty_forest_renders_nothing() {
        assert_eq!(render_menu(&[]), "");
    }

    #[test]
    fn leaf_renders_without_child_container() {
        let html = render_menu(&[leaf(1, "Home", "/")]);
        assert_eq!(html, r#"<ul><li><a href="/">Home</a></li></ul>"#);
    }

    #[test]
    fn in_path_branch_renders_children_visible() {
        let mut parent = branch(1, "About", "/about/", vec![leaf(2, "Team", "/about/team/")]);
        parent.is_in_path = true;

        let html = render_menu(&[parent]);

        assert!(html.contains(r#"<li class="has-children expanded">"#));
        assert!(html.contains(r#"<ul><li><a href="/about/team/">Team</a></li></ul>"#));
        assert!(!html.contains("display: none"));
    }

    #[test]
    fn off_path_branch_renders_children_hidden_but_present() {
        let parent = branch(1, "About", "/about/", vec![leaf(2, "Team", "/about/team/")]);

        let html = render_menu(&[parent]);

        // The subtree stays in the document for client-side toggling.
        assert!(html.contains(r#"<ul style="display: none;">"#));
        assert!(html.contains("Team"));
    }

    #[test]
    fn active_parent_shows_children_one_level_down() {
        let mut parent = branch(1, "About", "/about/", vec![leaf(2, "Team", "/about/team/")]);
        parent.is_active = true;
        parent.is_in_path = true;

        let html = render_menu(&[parent]);

        assert!(html.contains(r#"class="active has-children expanded""#));
        assert!(!html.contains("display: none"));
    }

    #[test]
    fn expansion_stops_one_level_below_the_active_entry() {
        // Root is active: its own children open, and each child's container
        // opens one level down because the parent is active. The branch two
        // levels below the active entry is collapsed again.
        let deep = branch(4, "Deep", "/a/b/c/", vec![leaf(5, "Leaf", "/a/b/c/d/")]);
        let mid = branch(2, "Mid", "/a/b/", vec![deep]);
        let mut root = branch(1, "Top", "/a/", vec![mid]);
        root.is_active = true;
        root.is_in_path = true;

        let html = render_menu(&[root]);

        let hidden = r#"<ul style="display: none;">"#;
        assert_eq!(html.matches(hidden).count(), 1);
        // Only the innermost container is collapsed.
        assert!(html.find(hidden).unwrap() > html.find("Deep").unwrap());
        assert!(html.contains("Leaf"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let parent = branch(1, "About", "/about/", vec![leaf(2, "Team", "/about/team/")]);
        let first = render_menu(std::slice::from_ref(&parent));
        let second = render_menu(std::slice::from_ref(&parent));
        assert_eq!(first, second);
    }

    #[test]
    fn titles_and_urls_are_escaped() {
        let html = render_menu(&[leaf(1, "Q&A <now>", "/q?a=1&b=\"2\"")]);
        assert!(html.contains("Q&amp;A &lt;now&gt;"));
        assert!(html.contains(r#"href="/q?a=1&amp;b=&quot;2&quot;""#));
    }
}
