//! Controls for growing the graph and triggering a calculation.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::editor::GraphEditor;
use crate::error::EditError;
use crate::metrics::{MetricsConfig, MetricsReport};

/// Add-node field, add-edge fields, Calculate trigger and the results display.
///
/// Every accepted edit clears `report`, since the numbers no longer describe
/// the graph on screen.
#[component]
pub fn EditorPanel(
	editor: RwSignal<GraphEditor>,
	report: RwSignal<Option<MetricsReport>>,
	config: MetricsConfig,
) -> impl IntoView {
	let node_id = RwSignal::new(String::new());
	let edge_source = RwSignal::new(String::new());
	let edge_target = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);

	let apply = move |result: Option<Result<(), EditError>>| match result {
		Some(Ok(())) => {
			error.set(None);
			report.set(None);
			true
		}
		Some(Err(e)) => {
			log::warn!("segment-graph: edit rejected: {}", e);
			error.set(Some(e.to_string()));
			false
		}
		None => false,
	};

	let add_node = move |_: MouseEvent| {
		let id = node_id.get();
		if apply(editor.try_update(|ed| ed.add_node(&id))) {
			node_id.set(String::new());
		}
	};

	let add_edge = move |_: MouseEvent| {
		let (source, target) = (edge_source.get(), edge_target.get());
		if apply(editor.try_update(|ed| ed.add_edge(&source, &target))) {
			edge_source.set(String::new());
			edge_target.set(String::new());
		}
	};

	let calculate = move |_: MouseEvent| {
		let result = editor.with(|ed| ed.calculate(&config));
		error.set(None);
		report.set(Some(result));
	};

	let clear = move |_: MouseEvent| {
		editor.update(GraphEditor::clear);
		error.set(None);
		report.set(None);
	};

	let counts = move || {
		editor.with(|ed| format!("{} nodes, {} edges", ed.data().nodes.len(), ed.data().links.len()))
	};

	let results = move || match report.get() {
		Some(r) => view! {
			<dl class="results">
				<dt>"Segment number"</dt>
				<dd>{r.metrics.segment_number}</dd>
				<dt>"Line cover number"</dt>
				<dd>{r.metrics.line_cover_number}</dd>
				<dt>"Path components"</dt>
				<dd>{format!("{} ({} nodes)", r.path_components.len(), r.path_node_count)}</dd>
				<dt>"Residual graph"</dt>
				<dd>{format!("{} nodes, {} edges", r.residual_node_count, r.residual_edge_count)}</dd>
			</dl>
		}
		.into_any(),
		None => view! { <p class="results placeholder">"Not calculated"</p> }.into_any(),
	};

	view! {
		<div class="editor-panel">
			<h2>"Graph"</h2>
			<p class="subtitle">{counts}</p>

			<div class="field">
				<input
					type="text"
					placeholder="Node id"
					prop:value=move || node_id.get()
					on:input=move |ev| node_id.set(event_target_value(&ev))
				/>
				<button on:click=add_node>"Add node"</button>
			</div>

			<div class="field">
				<input
					type="text"
					placeholder="Source"
					prop:value=move || edge_source.get()
					on:input=move |ev| edge_source.set(event_target_value(&ev))
				/>
				<input
					type="text"
					placeholder="Target"
					prop:value=move || edge_target.get()
					on:input=move |ev| edge_target.set(event_target_value(&ev))
				/>
				<button on:click=add_edge>"Add edge"</button>
			</div>

			{move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

			<div class="actions">
				<button class="primary" on:click=calculate>"Calculate"</button>
				<button on:click=clear>"Clear"</button>
			</div>

			{results}
		</div>
	}
}
