//! Canvas rendering for the force graph.
//!
//! Rendering uses two world-space passes after the background fill: edges
//! first, then nodes with their id labels on top. Edges inside a path
//! component are dashed once a calculation has classified the nodes.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo, NodeRole};
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let dimmed = state.highlight.active();

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let highlighted = state.highlight.is_edge_highlighted(n1.index(), n2.index());
		let color = if highlighted {
			theme.highlight.with_alpha(0.9)
		} else if dimmed {
			theme.edge.with_alpha(theme.edge.a * 0.4)
		} else {
			theme.edge
		};
		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(if highlighted {
			scale.edge_line_width * 1.5
		} else {
			scale.edge_line_width
		});

		if is_path_edge(&n1.data.user_data, &n2.data.user_data) {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(scale.dash_pattern.0),
				&JsValue::from_f64(scale.dash_pattern.1),
			));
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
		ctx.line_to(x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		ctx.stroke();
	});

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn is_path_edge(a: &NodeInfo, b: &NodeInfo) -> bool {
	a.role == NodeRole::Path && b.role == NodeRole::Path
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let dimmed = state.highlight.active();

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let highlighted = state.highlight.is_highlighted(idx);
		let alpha = if dimmed && !highlighted { 0.35 } else { 1.0 };

		let fill = match info.role {
			NodeRole::Unclassified => info.color.clone(),
			NodeRole::Path => theme.path_node.to_css(),
			NodeRole::Residual => theme.residual_node.to_css(),
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, scale.node_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&fill);
		ctx.fill();

		if state.highlight.hovered_node == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, scale.node_radius + scale.ring_width * 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&theme.highlight.with_alpha(0.8).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}

		ctx.set_fill_style_str(&theme.label.to_css());
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(&info.id, x + scale.node_radius + 4.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	});
}
