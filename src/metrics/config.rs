//! Engine configuration.

use serde::Deserialize;

/// What happens to the start node of a walk that is discarded for being a
/// single node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisitPolicy {
	/// The node is un-marked and later walks may pass through it.
	#[default]
	ReleaseRejected,
	/// The node stays visited and can only end up in the residual graph.
	Sticky,
}

/// Tunables for [`analyze`](super::analyze).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsConfig {
	/// How rejected walk starts are treated.
	pub visit_policy: VisitPolicy,
}

impl MetricsConfig {
	/// Parse a config from JSON, falling back to defaults on malformed input.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str::<MetricsConfig>(json) {
			Ok(config) => config,
			Err(e) => {
				log::warn!("segment-graph: ignoring malformed metrics config: {}", e);
				Self::default()
			}
		}
	}
}
