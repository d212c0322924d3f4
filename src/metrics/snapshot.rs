//! Immutable, identity-normalized copy of a graph.
//!
//! The engine never works on the caller's collections directly. A snapshot owns
//! its identities, resolves every link endpoint to a string once, and keeps an
//! index-based adjacency list for the walk in [`super::paths`].

use std::collections::HashMap;

use crate::graph::{GraphLink, GraphNode};

/// Owned view of a graph with normalized endpoints.
#[derive(Clone, Debug, Default)]
pub struct GraphSnapshot {
	nodes: Vec<String>,
	index: HashMap<String, usize>,
	edges: Vec<(String, String)>,
	/// Resolvable, de-duplicated neighbors per node, in edge order.
	adjacency: Vec<Vec<usize>>,
}

impl GraphSnapshot {
	/// Copy `nodes` and `links` into a snapshot.
	pub fn new(nodes: &[GraphNode], links: &[GraphLink]) -> Self {
		Self::from_parts(
			nodes.iter().map(|n| n.id.clone()).collect(),
			links
				.iter()
				.map(|l| {
					let (s, t) = l.endpoints();
					(s.to_string(), t.to_string())
				})
				.collect(),
		)
	}

	/// Build from raw identities. Duplicate node ids keep their first
	/// occurrence. Edges are kept as given, dangling endpoints included.
	pub fn from_parts(node_ids: Vec<String>, edges: Vec<(String, String)>) -> Self {
		let mut nodes = Vec::with_capacity(node_ids.len());
		let mut index = HashMap::with_capacity(node_ids.len());
		for id in node_ids {
			if index.contains_key(&id) {
				log::warn!("segment-graph: duplicate node id {:?} ignored", id);
				continue;
			}
			index.insert(id.clone(), nodes.len());
			nodes.push(id);
		}

		let mut adjacency = vec![Vec::new(); nodes.len()];
		for (s, t) in &edges {
			let (Some(&a), Some(&b)) = (index.get(s), index.get(t)) else {
				continue;
			};
			if a == b {
				continue;
			}
			if !adjacency[a].contains(&b) {
				adjacency[a].push(b);
			}
			if !adjacency[b].contains(&a) {
				adjacency[b].push(a);
			}
		}

		Self {
			nodes,
			index,
			edges,
			adjacency,
		}
	}

	/// Node ids in input order, duplicates removed.
	pub fn nodes(&self) -> &[String] {
		&self.nodes
	}

	/// Edges as given, dangling endpoints included.
	pub fn edges(&self) -> &[(String, String)] {
		&self.edges
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Position of `id` in [`nodes`](Self::nodes).
	pub fn position(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	/// Neighbor positions of the node at `idx`.
	pub fn neighbors(&self, idx: usize) -> &[usize] {
		self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
	}
}
