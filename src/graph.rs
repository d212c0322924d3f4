//! Graph data structures shared by the editor, the canvas and the metric engine.
//!
//! Links may name their endpoints either by bare identity (`"a"`) or by a node
//! object carrying an `id` (`{"id": "a", "x": 10.0}`). Both shapes deserialize
//! into [`NodeRef`], and everything downstream compares identities only.

use serde::{Deserialize, Serialize};

/// A node in the graph.
///
/// Only the identity matters to the metric engine. Positions live in the
/// canvas simulation and never travel through this type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
}

impl GraphNode {
	/// Node with the given identity.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

/// A link endpoint: a bare identity or a resolved node object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NodeRef {
	/// Bare node identity.
	Id(String),
	/// Resolved node reference. Any fields other than `id` are ignored.
	Node { id: String },
}

impl NodeRef {
	/// The identity this endpoint refers to.
	pub fn id(&self) -> &str {
		match self {
			NodeRef::Id(id) | NodeRef::Node { id } => id.as_str(),
		}
	}
}

impl From<&str> for NodeRef {
	fn from(id: &str) -> Self {
		NodeRef::Id(id.to_string())
	}
}

impl From<String> for NodeRef {
	fn from(id: String) -> Self {
		NodeRef::Id(id)
	}
}

impl From<&GraphNode> for NodeRef {
	fn from(node: &GraphNode) -> Self {
		NodeRef::Node {
			id: node.id.clone(),
		}
	}
}

/// An undirected edge between two nodes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphLink {
	/// Incidental identifier used by the canvas. Ignored by the engine.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// One endpoint. Direction carries no meaning.
	pub source: NodeRef,
	/// The other endpoint.
	pub target: NodeRef,
}

impl GraphLink {
	/// Link between two endpoints, without an id.
	pub fn new(source: impl Into<NodeRef>, target: impl Into<NodeRef>) -> Self {
		Self {
			id: None,
			source: source.into(),
			target: target.into(),
		}
	}

	/// Normalized `(source, target)` identities.
	pub fn endpoints(&self) -> (&str, &str) {
		(self.source.id(), self.target.id())
	}

	/// Whether this link joins `a` and `b` in either direction.
	pub fn connects(&self, a: &str, b: &str) -> bool {
		let (s, t) = self.endpoints();
		(s == a && t == b) || (s == b && t == a)
	}
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphData {
	/// Nodes in input order. Walks start from them in this order.
	pub nodes: Vec<GraphNode>,
	/// Links in input order. Cover ties go to the earliest.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn link_endpoints_accept_both_shapes() {
		let json = r#"{
			"nodes": [{"id": "a"}, {"id": "b", "x": 3.5, "fx": 1.0}],
			"links": [
				{"source": "a", "target": {"id": "b", "x": 3.5, "y": 2.0}},
				{"id": "b-a", "source": {"id": "b"}, "target": "a"}
			]
		}"#;
		let data: GraphData = serde_json::from_str(json).unwrap();

		assert_eq!(data.nodes, vec![GraphNode::new("a"), GraphNode::new("b")]);
		assert_eq!(data.links[0].endpoints(), ("a", "b"));
		assert_eq!(data.links[1].endpoints(), ("b", "a"));
		assert_eq!(data.links[1].id.as_deref(), Some("b-a"));
	}

	#[test]
	fn connects_ignores_direction() {
		let link = GraphLink::new("a", "b");
		assert!(link.connects("a", "b"));
		assert!(link.connects("b", "a"));
		assert!(!link.connects("a", "c"));
	}

	#[test]
	fn node_object_ref_from_graph_node() {
		let node = GraphNode::new("n1");
		let link = GraphLink::new(&node, "n2");
		assert_eq!(link.source, NodeRef::Node { id: "n1".into() });
		assert_eq!(link.endpoints(), ("n1", "n2"));
	}
}
