//! Errors raised while editing the graph.

use thiserror::Error;

/// A rejected edit to the graph being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
	/// The trimmed node id was empty.
	#[error("node id must not be empty")]
	EmptyId,

	/// A node with this id already exists.
	#[error("node {0:?} already exists")]
	DuplicateNode(String),

	/// An edge endpoint names no existing node.
	#[error("no node named {0:?}")]
	UnknownNode(String),

	/// Both endpoints of an edge are the same node.
	#[error("cannot link {0:?} to itself")]
	SelfLoop(String),

	/// The two nodes are already linked, in either direction.
	#[error("{from:?} and {to:?} are already linked")]
	DuplicateEdge {
		/// First endpoint of the rejected edge.
		from: String,
		/// Second endpoint of the rejected edge.
		to: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_node() {
		assert_eq!(
			EditError::UnknownNode("q".into()).to_string(),
			r#"no node named "q""#
		);
		assert_eq!(
			EditError::DuplicateEdge {
				from: "a".into(),
				to: "b".into()
			}
			.to_string(),
			r#""a" and "b" are already linked"#
		);
	}

	#[test]
	fn errors_box_as_std_error() {
		let err: Box<dyn std::error::Error> = Box::new(EditError::SelfLoop("a".into()));
		assert_eq!(err.to_string(), r#"cannot link "a" to itself"#);
		assert!(err.source().is_none());
	}
}
