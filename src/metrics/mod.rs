//! Segment number and line cover number of an undirected graph.
//!
//! The computation runs in four steps over an owned [`GraphSnapshot`]:
//!
//! 1. [`find_path_components`] pulls out chains of nodes reachable by a linear
//!    walk through single unvisited neighbors.
//! 2. [`remove_path_components`] drops those chains, leaving the residual graph.
//! 3. [`compute_line_cover`] greedily covers the residual graph with edges.
//! 4. [`compute_segment_number`] derives the residual segment count, and the
//!    number of nodes absorbed in step 1 is added on top.
//!
//! # Example
//!
//! ```
//! use segment_graph::{GraphLink, GraphNode, compute_graph_metrics};
//!
//! let nodes = vec![GraphNode::new("a"), GraphNode::new("b"), GraphNode::new("c")];
//! let links = vec![
//!     GraphLink::new("a", "b"),
//!     GraphLink::new("b", "c"),
//!     GraphLink::new("c", "a"),
//! ];
//!
//! let metrics = compute_graph_metrics(&nodes, &links);
//! assert_eq!(metrics.line_cover_number, 2);
//! assert_eq!(metrics.segment_number, 3);
//! ```

mod config;
mod cover;
mod paths;
mod residual;
mod segment;
mod snapshot;

use serde::Serialize;

use crate::graph::{GraphData, GraphLink, GraphNode};

pub use config::{MetricsConfig, VisitPolicy};
pub use cover::compute_line_cover;
pub use paths::{PathComponents, find_path_components};
pub use residual::remove_path_components;
pub use segment::compute_segment_number;
pub use snapshot::GraphSnapshot;

/// The two numbers reported for a graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
	/// Residual `min(nodes, line_cover²)` plus the nodes absorbed into chains.
	pub segment_number: usize,
	/// Greedy line cover size of the residual graph.
	pub line_cover_number: usize,
}

/// [`GraphMetrics`] plus the intermediate results that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
	/// The reported numbers.
	pub metrics: GraphMetrics,
	/// Extracted chains, in the order their start nodes appear in the input.
	pub path_components: Vec<Vec<String>>,
	/// Total nodes across all chains.
	pub path_node_count: usize,
	/// Nodes left after removing the chains.
	pub residual_node_count: usize,
	/// Edges with both endpoints left in the residual graph.
	pub residual_edge_count: usize,
}

/// Compute both metrics with the default [`MetricsConfig`].
pub fn compute_graph_metrics(nodes: &[GraphNode], links: &[GraphLink]) -> GraphMetrics {
	run(&GraphSnapshot::new(nodes, links), &MetricsConfig::default()).metrics
}

/// Compute both metrics and keep the breakdown.
pub fn analyze(data: &GraphData, config: &MetricsConfig) -> MetricsReport {
	run(&GraphSnapshot::new(&data.nodes, &data.links), config)
}

fn run(graph: &GraphSnapshot, config: &MetricsConfig) -> MetricsReport {
	let paths = find_path_components(graph, config.visit_policy);
	let residual = remove_path_components(graph, &paths);

	let line_cover_number = compute_line_cover(&residual);
	let path_node_count = paths.node_count();
	let segment_number = compute_segment_number(&residual, line_cover_number) + path_node_count;

	MetricsReport {
		metrics: GraphMetrics {
			segment_number,
			line_cover_number,
		},
		path_components: paths.chains,
		path_node_count,
		residual_node_count: residual.node_count(),
		residual_edge_count: residual.edge_count(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_serialize_camel_case() {
		let metrics = GraphMetrics {
			segment_number: 4,
			line_cover_number: 1,
		};
		let json = serde_json::to_string(&metrics).unwrap();
		assert_eq!(json, r#"{"segmentNumber":4,"lineCoverNumber":1}"#);
	}

	#[test]
	fn report_agrees_with_plain_metrics() {
		let data = GraphData {
			nodes: ["a", "b", "c", "d", "e"].map(GraphNode::new).to_vec(),
			links: vec![
				GraphLink::new("a", "b"),
				GraphLink::new("b", "c"),
				GraphLink::new("c", "a"),
				GraphLink::new("d", "e"),
			],
		};
		let report = analyze(&data, &MetricsConfig::default());

		assert_eq!(report.metrics, compute_graph_metrics(&data.nodes, &data.links));
		assert_eq!(report.path_components, vec![vec!["d".to_string(), "e".to_string()]]);
		assert_eq!(report.path_node_count, 2);
		assert_eq!(report.residual_node_count, 3);
		assert_eq!(report.residual_edge_count, 3);
		assert_eq!(
			report.metrics,
			GraphMetrics {
				segment_number: 5,
				line_cover_number: 2,
			}
		);
	}
}
