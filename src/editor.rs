//! Mutable graph model behind the editor panel.
//!
//! The UI grows the graph one edit at a time through [`GraphEditor`]. The
//! metric engine only ever sees copies taken with [`GraphEditor::snapshot`],
//! never the live collections.

use crate::error::EditError;
use crate::graph::{GraphData, GraphLink, GraphNode};
use crate::metrics::{self, MetricsConfig, MetricsReport};

/// Validating builder for a simple undirected graph.
#[derive(Clone, Debug, Default)]
pub struct GraphEditor {
	data: GraphData,
}

impl GraphEditor {
	/// Start from existing data. Entries are taken as-is, without validation.
	pub fn from_data(data: GraphData) -> Self {
		Self { data }
	}

	/// The graph as built so far.
	pub fn data(&self) -> &GraphData {
		&self.data
	}

	/// Owned copy of the current graph.
	pub fn snapshot(&self) -> GraphData {
		self.data.clone()
	}

	/// Whether a node with this id exists.
	pub fn contains(&self, id: &str) -> bool {
		self.data.nodes.iter().any(|n| n.id == id)
	}

	pub fn add_node(&mut self, id: &str) -> Result<(), EditError> {
		let id = id.trim();
		if id.is_empty() {
			return Err(EditError::EmptyId);
		}
		if self.contains(id) {
			return Err(EditError::DuplicateNode(id.to_string()));
		}

		self.data.nodes.push(GraphNode::new(id));
		log::info!("segment-graph: added node {:?}", id);
		Ok(())
	}

	pub fn add_edge(&mut self, source: &str, target: &str) -> Result<(), EditError> {
		let (source, target) = (source.trim(), target.trim());
		if source.is_empty() || target.is_empty() {
			return Err(EditError::EmptyId);
		}
		for id in [source, target] {
			if !self.contains(id) {
				return Err(EditError::UnknownNode(id.to_string()));
			}
		}
		if source == target {
			return Err(EditError::SelfLoop(source.to_string()));
		}
		if self.data.links.iter().any(|l| l.connects(source, target)) {
			return Err(EditError::DuplicateEdge {
				from: source.to_string(),
				to: target.to_string(),
			});
		}

		self.data.links.push(GraphLink {
			id: Some(format!("{source}-{target}")),
			..GraphLink::new(source, target)
		});
		log::info!("segment-graph: added edge {:?} - {:?}", source, target);
		Ok(())
	}

	pub fn clear(&mut self) {
		self.data = GraphData::default();
	}

	/// Run the metric engine on a copy of the current graph.
	pub fn calculate(&self, config: &MetricsConfig) -> MetricsReport {
		let report = metrics::analyze(&self.snapshot(), config);
		log::info!(
			"segment-graph: segment number {}, line cover number {}",
			report.metrics.segment_number,
			report.metrics.line_cover_number
		);
		report
	}
}
