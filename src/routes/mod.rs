//! Client-side routing.
//!
//! ```text
//! RouteTable (built once, immutable)
//!     + MemoryHistory (current location, back/forward)
//!     + RenderStrategy (match -> Rendered)
//!     → Router, mounted into the page with a Resolver
//! ```
//!
//! Matching is first-match-wins over the declaration order.

pub mod history;
pub mod pattern;
pub mod router;
pub mod table;

pub use history::MemoryHistory;
pub use router::{DefaultRender, Rendered, Resolver, Router, RouterError};
pub use table::{Component, RouteTable};
