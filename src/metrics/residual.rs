//! Residual graph: what remains once path components are taken out.

use std::collections::HashSet;

use super::paths::PathComponents;
use super::snapshot::GraphSnapshot;

/// Drop every path-component node, and every edge that does not have both
/// endpoints among the surviving nodes.
pub fn remove_path_components(graph: &GraphSnapshot, paths: &PathComponents) -> GraphSnapshot {
	let absorbed: HashSet<&str> = paths.node_ids().collect();

	let nodes: Vec<String> = graph
		.nodes()
		.iter()
		.filter(|id| !absorbed.contains(id.as_str()))
		.cloned()
		.collect();
	let survivors: HashSet<&str> = nodes.iter().map(String::as_str).collect();

	let edges = graph
		.edges()
		.iter()
		.filter(|(s, t)| survivors.contains(s.as_str()) && survivors.contains(t.as_str()))
		.cloned()
		.collect();

	let residual = GraphSnapshot::from_parts(nodes, edges);
	log::debug!(
		"segment-graph: residual graph has {} nodes, {} edges",
		residual.node_count(),
		residual.edge_count()
	);
	residual
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn removes_absorbed_nodes_and_touching_edges() {
		let graph = GraphSnapshot::from_parts(
			vec!["a".into(), "b".into(), "c".into(), "d".into()],
			vec![
				("a".into(), "b".into()),
				("b".into(), "c".into()),
				("c".into(), "d".into()),
				("d".into(), "b".into()),
				("c".into(), "ghost".into()),
			],
		);
		let paths = PathComponents {
			chains: vec![vec!["a".into()]],
		};
		let residual = remove_path_components(&graph, &paths);

		assert_eq!(residual.nodes(), &["b", "c", "d"]);
		assert_eq!(
			residual.edges(),
			&[
				("b".to_string(), "c".to_string()),
				("c".to_string(), "d".to_string()),
				("d".to_string(), "b".to_string()),
			]
		);
	}

	#[test]
	fn input_is_untouched() {
		let graph = GraphSnapshot::from_parts(
			vec!["a".into(), "b".into()],
			vec![("a".into(), "b".into())],
		);
		let paths = PathComponents {
			chains: vec![vec!["a".into(), "b".into()]],
		};
		let residual = remove_path_components(&graph, &paths);
		assert_eq!(residual.node_count(), 0);
		assert_eq!(residual.edge_count(), 0);
		assert_eq!(graph.node_count(), 2);
		assert_eq!(graph.edge_count(), 1);
	}
}
