//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! pan/zoom transform and hover highlighting. The editor only ever appends
//! nodes and links, so [`ForceGraphState::sync`] grows the simulation in
//! place and keeps existing positions. Anything else triggers a rebuild.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::Theme;
use crate::graph::GraphData;

/// How the last calculation classified a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeRole {
	/// No calculation since the node was added.
	#[default]
	Unclassified,
	/// Absorbed into a path component.
	Path,
	/// Left in the residual graph.
	Residual,
}

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub color: String,
	pub role: NodeRole,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hovered node and its neighbors.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered_node: Option<DefaultNodeIdx>,
	highlighted: HashSet<DefaultNodeIdx>,
}

impl HighlightState {
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered_node == node {
			return;
		}

		self.hovered_node = node;
		self.highlighted.clear();

		if let Some(idx) = node {
			self.highlighted.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					self.highlighted.insert(tgt);
				} else if tgt == idx {
					self.highlighted.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.highlighted.contains(&idx)
	}

	pub fn is_edge_highlighted(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> bool {
		self.hovered_node
			.is_some_and(|h| (h == a || h == b) && self.is_highlighted(a) && self.is_highlighted(b))
	}

	pub fn active(&self) -> bool {
		self.hovered_node.is_some()
	}
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

/// Core graph state combining physics simulation with interaction tracking.
///
/// Created when the canvas mounts and mutated each frame by the animation
/// loop. The editor's graph reaches it through [`sync`](Self::sync).
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	/// Number of links from the editor already considered.
	synced_links: usize,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut state = Self {
			graph: simulation(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: true,
			id_to_idx: HashMap::new(),
			edges: Vec::new(),
			synced_links: 0,
		};
		state.sync(data, theme);
		state
	}

	/// Bring the simulation up to date with `data`.
	pub fn sync(&mut self, data: &GraphData, theme: &Theme) {
		let shrunk = data.nodes.len() < self.id_to_idx.len() || data.links.len() < self.synced_links;
		if shrunk {
			log::debug!("segment-graph: graph shrank, rebuilding simulation");
			self.graph = simulation();
			self.id_to_idx.clear();
			self.edges.clear();
			self.synced_links = 0;
			self.drag = DragState::default();
			self.highlight = HighlightState::default();
		}

		for node in &data.nodes {
			if self.id_to_idx.contains_key(&node.id) {
				continue;
			}
			let i = self.id_to_idx.len();
			// Spread new nodes on a small spiral around the origin.
			let angle = i as f64 * 2.4;
			let radius = 30.0 + 8.0 * (i as f64).sqrt() * PI;
			let idx = self.graph.add_node(NodeData {
				x: (radius * angle.cos()) as f32,
				y: (radius * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color: theme.palette.get(i).to_css(),
					role: NodeRole::Unclassified,
				},
			});
			self.id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links[self.synced_links..] {
			let (source, target) = link.endpoints();
			if let (Some(&src), Some(&tgt)) = (self.id_to_idx.get(source), self.id_to_idx.get(target))
			{
				self.graph.add_edge(src, tgt, EdgeData::default());
				self.edges.push((src, tgt));
			}
		}
		self.synced_links = data.links.len();
	}

	/// Color nodes by the given path-component membership, or clear the roles.
	pub fn set_roles(&mut self, path_nodes: Option<&HashSet<String>>) {
		self.graph.visit_nodes_mut(|node| {
			let info = &mut node.data.user_data;
			info.role = match path_nodes {
				None => NodeRole::Unclassified,
				Some(set) if set.contains(&info.id) => NodeRole::Path,
				Some(_) => NodeRole::Residual,
			};
		});
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
