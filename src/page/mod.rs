//! Host document model: the page the dashboard boots into.
//!
//! The document carries the three touchpoints the bootstrap sequence needs:
//! the body class list, the loader element and the mount node. It also
//! carries the readiness signal that drives the loading transition.

pub mod document;
pub mod load_state;

pub use document::{ClassList, Document, ReadyState, View, ViewMount};
pub use load_state::{transition, LoadSignal, LoadState};

/// Body class present while the page is loading.
pub const BODY_LOADING: &str = "loading";
/// Body class added once the readiness signal reports `Complete`.
pub const BODY_LOADED: &str = "loaded";
