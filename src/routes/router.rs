//! Router built from a route table, a history and a render strategy.

use super::history::{Location, MemoryHistory};
use super::table::{Component, RouteMatch, RouteTable};
use crate::store::Environment;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route matches {0}")]
    NotFound(String),
    #[error("no history entry in that direction")]
    NoHistory,
}

/// Output of a render strategy for the current location.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Route {
        component: Component,
        params: HashMap<String, String>,
        location: Location,
    },
    NotFound {
        location: Location,
    },
}

/// Turns a location and its match into something to draw.
pub trait RenderStrategy: Send {
    fn render(&self, location: &Location, matched: Option<RouteMatch>) -> Rendered;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRender;

impl RenderStrategy for DefaultRender {
    fn render(&self, location: &Location, matched: Option<RouteMatch>) -> Rendered {
        match matched {
            Some(m) => Rendered::Route {
                component: m.component,
                params: m.params,
                location: location.clone(),
            },
            None => Rendered::NotFound {
                location: location.clone(),
            },
        }
    }
}

/// Gives routed components access to the data-store environment.
#[derive(Debug)]
pub struct Resolver {
    environment: Environment,
}

impl Resolver {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }
}

pub struct Router {
    table: RouteTable,
    history: MemoryHistory,
    render: Box<dyn RenderStrategy>,
    resolver: Option<Resolver>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes_count", &self.table.len())
            .field("location", &self.history.current().href())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl Router {
    pub fn new<R>(table: RouteTable, history: MemoryHistory, render: R) -> Self
    where
        R: RenderStrategy + 'static,
    {
        Self {
            table,
            history,
            render: Box::new(render),
            resolver: None,
        }
    }

    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_ref()
    }

    pub fn resolver_mut(&mut self) -> Option<&mut Resolver> {
        self.resolver.as_mut()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn current_match(&self) -> Option<RouteMatch> {
        self.table.resolve(&self.location().path)
    }

    fn check(&self) -> Result<RouteMatch, RouterError> {
        self.current_match()
            .ok_or_else(|| RouterError::NotFound(self.location().path.clone()))
    }

    /// Push `url` onto the history. The entry is kept even when nothing
    /// matches, so the not-found view renders at that location.
    pub fn navigate(&mut self, url: &str) -> Result<RouteMatch, RouterError> {
        self.history.push(url);
        tracing::debug!(location = %self.location().href(), "navigate");
        self.check()
    }

    pub fn replace(&mut self, url: &str) -> Result<RouteMatch, RouterError> {
        self.history.replace(url);
        tracing::debug!(location = %self.location().href(), "replace");
        self.check()
    }

    pub fn back(&mut self) -> Result<&Location, RouterError> {
        self.history.back().ok_or(RouterError::NoHistory)
    }

    pub fn forward(&mut self) -> Result<&Location, RouterError> {
        self.history.forward().ok_or(RouterError::NoHistory)
    }

    pub fn render(&self) -> Rendered {
        self.render.render(self.location(), self.current_match())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{OfflineNetwork, RecordSource, Store};

    fn router() -> Router {
        Router::new(
            RouteTable::dashboard(Component::DefaultLayout),
            MemoryHistory::new("/"),
            DefaultRender,
        )
    }

    #[test]
    fn test_render_root() {
        let r = router();
        match r.render() {
            Rendered::Route { component, .. } => assert_eq!(component, Component::DefaultLayout),
            other => panic!("unexpected render: {:?}", other),
        }
    }

    #[test]
    fn test_navigate_unknown_renders_not_found() {
        let mut r = router();
        assert_eq!(
            r.navigate("/missing"),
            Err(RouterError::NotFound("/missing".into()))
        );
        assert!(matches!(r.render(), Rendered::NotFound { .. }));
        assert_eq!(r.location().path, "/missing");

        r.back().unwrap();
        assert_eq!(r.location().path, "/");
        assert_eq!(r.back().unwrap_err(), RouterError::NoHistory);
    }

    #[test]
    fn test_navigate_keeps_query() {
        let mut r = router();
        let m = r.navigate("/?tab=alerts").unwrap();
        assert_eq!(m.component, Component::DefaultLayout);
        assert_eq!(
            r.location().query.get("tab").map(String::as_str),
            Some("alerts")
        );
    }

    #[test]
    fn test_resolver_exposes_environment() {
        let env = Environment::new(OfflineNetwork, Store::new(RecordSource::new()));
        let r = router().with_resolver(Resolver::new(env));
        assert_eq!(r.resolver().unwrap().environment().store().record_count(), 0);
    }
}
