//! segment-graph: build an undirected graph interactively and compute its
//! segment number and line cover number.
//!
//! The metric engine in [`metrics`] is plain Rust with no browser dependency.
//! The rest of the crate is a WASM front end: an editor panel that grows the
//! graph and a force-directed canvas that lays it out.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod editor;
pub mod error;
pub mod graph;
pub mod metrics;

pub use components::force_graph::ForceGraphCanvas;
pub use editor::GraphEditor;
pub use error::EditError;
pub use graph::{GraphData, GraphLink, GraphNode, NodeRef};
pub use metrics::{GraphMetrics, MetricsConfig, MetricsReport, VisitPolicy, compute_graph_metrics};

use components::editor_panel::EditorPanel;
use components::split_view::SplitLayout;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("segment-graph: logging initialized");
}

/// Text of the `<script>` element with the given id, if present.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load a starting graph from a script element with id="graph-data".
/// Expected format: JSON with { nodes: [...], links: [...] }
fn load_graph_data() -> Option<GraphData> {
	let json_text = script_text("graph-data")?;

	match serde_json::from_str::<GraphData>(&json_text) {
		Ok(data) => {
			info!(
				"segment-graph: loaded {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("segment-graph: failed to parse graph data: {}", e);
			None
		}
	}
}

/// Load engine settings from a script element with id="metrics-config".
fn load_metrics_config() -> MetricsConfig {
	script_text("metrics-config")
		.map(|json| MetricsConfig::from_json(&json))
		.unwrap_or_default()
}

/// Main application component: editor on the left, canvas on the right.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let editor = RwSignal::new(GraphEditor::from_data(load_graph_data().unwrap_or_default()));
	let report = RwSignal::new(None::<MetricsReport>);
	let config = load_metrics_config();
	let split = SplitLayout::new();

	let graph_signal = Signal::derive(move || editor.with(GraphEditor::snapshot));
	let report_signal: Signal<Option<MetricsReport>> = report.into();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Segment & Line Cover" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div
			class="split-view"
			on:mousemove=split.on_mousemove()
			on:mouseup=split.end_drag()
			on:mouseleave=split.end_drag()
		>
			<div class="left-pane" style:width=split.left_style()>
				<EditorPanel editor=editor report=report config=config />
			</div>
			<div class="divider" on:mousedown=split.on_divider_down() />
			<div class="right-pane" style:width=split.right_style()>
				<div class="graph-pane">
					<ForceGraphCanvas data=graph_signal report=report_signal />
				</div>
				<div class="graph-overlay">
					<p class="subtitle">"Drag nodes to reposition. Scroll to zoom. Drag background to pan."</p>
				</div>
			</div>
		</div>
	}
}
