//! Menu fragment handler.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Current request path; determines the active branch.
    pub path: Option<String>,
}

/// GET /api/menus/{menu_name}?path=/current/path
///
/// Returns the rendered menu as an HTML fragment. An unknown or empty menu,
/// or a missing `path` parameter, yields an empty body rather than an error.
pub async fn render_menu_handler(
    State(state): State<AppState>,
    Path(menu_name): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>, ApiError> {
    let Some(path) = query.path.filter(|p| !p.is_empty()) else {
        return Ok(Html(String::new()));
    };

    let html = state.menu_service.draw_menu(&menu_name, &path).await?;
    Ok(Html(html))
}
