//! Segment number of the residual graph.

use super::snapshot::GraphSnapshot;

/// Segment number of the residual graph: `min(nodes, line_cover²)`.
///
/// Path-component nodes are added on top of this by the caller.
pub fn compute_segment_number(residual: &GraphSnapshot, line_cover: usize) -> usize {
	residual
		.node_count()
		.min(line_cover.saturating_mul(line_cover))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(n: usize) -> GraphSnapshot {
		GraphSnapshot::from_parts((0..n).map(|i| i.to_string()).collect(), vec![])
	}

	#[test]
	fn bounded_by_node_count() {
		assert_eq!(compute_segment_number(&nodes(3), 2), 3);
		assert_eq!(compute_segment_number(&nodes(10), 2), 4);
	}

	#[test]
	fn zero_lines_zero_segments() {
		assert_eq!(compute_segment_number(&nodes(5), 0), 0);
	}

	#[test]
	fn huge_cover_does_not_overflow() {
		assert_eq!(compute_segment_number(&nodes(7), usize::MAX), 7);
	}
}
