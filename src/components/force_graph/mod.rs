//! Force-directed graph canvas.
//!
//! Renders the graph being edited on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Hover highlighting of a node and its neighbors
//! - Path-component / residual colouring after a calculation
//!
//! The canvas owns all positional state. It receives identities through
//! [`GraphData`](crate::GraphData) and hands nothing back to the engine.

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
