//! The static route table.

use super::pattern::PathPattern;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// View components a route can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Admin shell with the dashboard overview.
    DefaultLayout,
    /// Bare top-level application component.
    App,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Component::DefaultLayout => "DefaultLayout",
            Component::App => "App",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteDecl {
    pub pattern: PathPattern,
    pub component: Component,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub pattern: String,
    pub component: Component,
    pub params: HashMap<String, String>,
}

/// Ordered, immutable list of route declarations. First match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDecl>,
}

impl RouteTable {
    pub fn new(routes: Vec<(&str, Component)>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(pattern, component)| RouteDecl {
                    pattern: PathPattern::new(pattern),
                    component,
                })
                .collect(),
        }
    }

    /// The dashboard's route table, with `root` bound to `/`.
    pub fn dashboard(root: Component) -> Self {
        Self::new(vec![("/", root)])
    }

    pub fn routes(&self) -> &[RouteDecl] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| RouteMatch {
                pattern: route.pattern.as_str().to_string(),
                component: route.component,
                params,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_has_single_root_entry() {
        let table = RouteTable::dashboard(Component::DefaultLayout);
        let entries: Vec<_> = table
            .routes()
            .iter()
            .filter(|r| r.pattern.as_str() == "/")
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component, Component::DefaultLayout);
    }

    #[test]
    fn test_resolve_root_and_unknown() {
        let table = RouteTable::dashboard(Component::App);
        let m = table.resolve("/").unwrap();
        assert_eq!(m.component, Component::App);
        assert_eq!(table.resolve("/?tab=1").unwrap().component, Component::App);
        assert!(table.resolve("/contacts").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            ("/contacts/new", Component::App),
            ("/contacts/:id", Component::DefaultLayout),
        ]);
        assert_eq!(
            table.resolve("/contacts/new").unwrap().component,
            Component::App
        );
        let m = table.resolve("/contacts/9").unwrap();
        assert_eq!(m.component, Component::DefaultLayout);
        assert_eq!(m.params.get("id").map(String::as_str), Some("9"));
    }
}
