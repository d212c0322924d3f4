//! UI components: the graph canvas, the editor controls and the pane layout.

pub mod editor_panel;
pub mod force_graph;
pub mod split_view;
