//! Config-backed named route table.
//!
//! The application owns its route names; the menu core only sees the
//! lookup through the [`UrlResolver`] port.

use std::collections::HashMap;

use menu_core::UrlResolver;

pub struct StaticRouteTable {
    routes: HashMap<String, String>,
}

impl StaticRouteTable {
    pub fn new(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }
}

impl UrlResolver for StaticRouteTable {
    fn resolve_named(&self, name: &str) -> Option<String> {
        self.routes.get(name).cloned()
    }
}
