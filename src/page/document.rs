use crate::routes::{Component, Router};
use thiserror::Error;

/// Document readiness. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadyState::Loading => "loading",
            ReadyState::Interactive => "interactive",
            ReadyState::Complete => "complete",
        }
    }
}

/// Ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

/// What gets mounted into the mount node.
#[derive(Debug)]
pub enum View {
    /// Router with its resolver (relay mode).
    Router(Box<Router>),
    /// A single top-level component rendered directly.
    Component(Component),
}

#[derive(Debug)]
pub struct Element {
    pub id: String,
    pub mounted: Option<View>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mounted: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Body {
    pub classes: ClassList,
    children: Vec<Element>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("mount target #{0} not found")]
    TargetMissing(String),
}

/// Consumes a view and a target node id and performs the mount.
pub trait ViewMount {
    fn mount(&mut self, view: View, target: &str) -> Result<(), MountError>;
}

#[derive(Debug)]
pub struct Document {
    ready_state: ReadyState,
    body: Option<Body>,
}

impl Document {
    /// A page with a body holding the loader element and the mount node.
    pub fn new(loader_id: &str, mount_id: &str) -> Self {
        let mut doc = Self {
            ready_state: ReadyState::Loading,
            body: Some(Body::default()),
        };
        doc.append_element(Element::new(loader_id));
        doc.append_element(Element::new(mount_id));
        doc
    }

    /// A page with no body at all.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            ready_state: ReadyState::Loading,
            body: None,
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Advance readiness. Returns `true` if the state changed; going
    /// backwards or repeating the current state is ignored.
    pub fn set_ready_state(&mut self, state: ReadyState) -> bool {
        if state <= self.ready_state {
            return false;
        }
        self.ready_state = state;
        true
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut Body> {
        self.body.as_mut()
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body.as_ref().is_some_and(|b| b.classes.contains(class))
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.as_ref()?.children.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.as_mut()?.children.iter_mut().find(|e| e.id == id)
    }

    /// Append an element to the body. No-op without a body.
    pub fn append_element(&mut self, element: Element) {
        if let Some(body) = self.body.as_mut() {
            body.children.push(element);
        }
    }

    /// Remove a body child by id. Returns whether anything was removed.
    pub fn remove_element(&mut self, id: &str) -> bool {
        let Some(body) = self.body.as_mut() else {
            return false;
        };
        let before = body.children.len();
        body.children.retain(|e| e.id != id);
        body.children.len() != before
    }

    /// The view mounted under `id`, if any.
    pub fn mounted(&self, id: &str) -> Option<&View> {
        self.element(id)?.mounted.as_ref()
    }

    pub fn mounted_router(&self, id: &str) -> Option<&Router> {
        match self.mounted(id)? {
            View::Router(router) => Some(&**router),
            View::Component(_) => None,
        }
    }

    pub fn mounted_router_mut(&mut self, id: &str) -> Option<&mut Router> {
        match self.element_mut(id)?.mounted.as_mut()? {
            View::Router(router) => Some(&mut **router),
            View::Component(_) => None,
        }
    }
}

impl ViewMount for Document {
    fn mount(&mut self, view: View, target: &str) -> Result<(), MountError> {
        let element = self
            .element_mut(target)
            .ok_or_else(|| MountError::TargetMissing(target.to_string()))?;
        element.mounted = Some(view);
        Ok(())
    }
}
