//! Path-component extraction.
//!
//! This is a heuristic, not a graph-theoretic decomposition. Nodes are visited
//! in input order; from each unvisited node a linear walk follows the only
//! unvisited neighbor for as long as there is exactly one. Walks that collect
//! more than one node become path components. Which chain absorbs a node next
//! to a cycle depends on the input order.

use super::config::VisitPolicy;
use super::snapshot::GraphSnapshot;

/// Chains discovered by [`find_path_components`], in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathComponents {
	/// Node ids of each chain, in walk order.
	pub chains: Vec<Vec<String>>,
}

impl PathComponents {
	/// Every node absorbed into a chain, chain by chain.
	pub fn node_ids(&self) -> impl Iterator<Item = &str> {
		self.chains.iter().flatten().map(String::as_str)
	}

	/// Total nodes across all chains.
	pub fn node_count(&self) -> usize {
		self.chains.iter().map(Vec::len).sum()
	}

	/// Whether no chain was found.
	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}

/// Extract path chains from `graph`. No node appears in more than one chain.
pub fn find_path_components(graph: &GraphSnapshot, policy: VisitPolicy) -> PathComponents {
	let mut visited = vec![false; graph.node_count()];
	let mut chains: Vec<Vec<String>> = Vec::new();

	for start in 0..graph.node_count() {
		if visited[start] {
			continue;
		}
		let walk = walk_chain(graph, start, &mut visited);
		if walk.len() > 1 {
			chains.push(walk.iter().map(|&i| graph.nodes()[i].clone()).collect());
		} else if policy == VisitPolicy::ReleaseRejected {
			visited[start] = false;
		}
	}

	let components = PathComponents { chains };
	log::debug!(
		"segment-graph: {} path components covering {} nodes",
		components.chains.len(),
		components.node_count()
	);
	components
}

/// Walk from `start`, marking every node taken. Stops at a node with zero or
/// several unvisited neighbors.
fn walk_chain(graph: &GraphSnapshot, start: usize, visited: &mut [bool]) -> Vec<usize> {
	let mut chain = Vec::new();
	let mut current = start;

	loop {
		visited[current] = true;
		chain.push(current);

		let mut open = graph.neighbors(current).iter().filter(|&&n| !visited[n]);
		match (open.next(), open.next()) {
			(Some(&next), None) => current = next,
			_ => break,
		}
	}

	chain
}
