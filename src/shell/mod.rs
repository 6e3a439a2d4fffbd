//! Presentation boundary: routing table, sidebar and modal state machines,
//! and plain-text page renderers. No business logic lives here; everything
//! consumes the merged/filtered view and the form callbacks.

pub mod modal;
pub mod render;
pub mod routes;

pub use modal::*;
pub use render::*;
pub use routes::*;
