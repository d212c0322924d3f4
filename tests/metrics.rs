use segment_graph::metrics::analyze;
use segment_graph::{
	GraphData, GraphLink, GraphMetrics, GraphNode, MetricsConfig, VisitPolicy,
	compute_graph_metrics,
};

fn graph(nodes: &[&str], links: &[(&str, &str)]) -> GraphData {
	GraphData {
		nodes: nodes.iter().map(|id| GraphNode::new(*id)).collect(),
		links: links.iter().map(|(s, t)| GraphLink::new(*s, *t)).collect(),
	}
}

fn metrics(data: &GraphData) -> GraphMetrics {
	compute_graph_metrics(&data.nodes, &data.links)
}

fn expect(data: &GraphData, segment_number: usize, line_cover_number: usize) {
	assert_eq!(
		metrics(data),
		GraphMetrics {
			segment_number,
			line_cover_number,
		}
	);
}

/// Every ordering of `items` (Heap's algorithm).
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
	fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
		if k <= 1 {
			out.push(items.clone());
			return;
		}
		heap(k - 1, items, out);
		for i in 0..k - 1 {
			let j = if k % 2 == 0 { i } else { 0 };
			items.swap(j, k - 1);
			heap(k - 1, items, out);
		}
	}
	let mut out = Vec::new();
	heap(items.len(), &mut items.to_vec(), &mut out);
	out
}

/// Deterministic pseudo-random value in [0, 1).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

#[test]
fn empty_graph_is_zero() {
	expect(&GraphData::default(), 0, 0);
}

#[test]
fn isolated_nodes_cost_one_each() {
	let data = graph(&["a", "b", "c", "d", "e"], &[]);
	expect(&data, 5, 5);
	let report = analyze(&data, &MetricsConfig::default());
	assert_eq!(report.path_node_count, 0);
	assert_eq!(report.residual_node_count, 5);
}

#[test]
fn bare_edge_is_a_path_component() {
	let data = graph(&["a", "b"], &[("a", "b")]);
	expect(&data, 2, 0);
	let report = analyze(&data, &MetricsConfig::default());
	assert_eq!(report.path_components, vec![vec!["a".to_string(), "b".to_string()]]);
	assert_eq!(report.residual_node_count, 0);
}

#[test]
fn triangle_stays_in_the_residual_graph() {
	let data = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
	expect(&data, 3, 2);
	let report = analyze(&data, &MetricsConfig::default());
	assert!(report.path_components.is_empty());
	assert_eq!(report.residual_edge_count, 3);
}

#[test]
fn four_node_path_is_absorbed_whole() {
	let data = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")]);
	expect(&data, 4, 0);
}

#[test]
fn four_cycle_is_covered_by_two_lines() {
	let data = graph(
		&["a", "b", "c", "d"],
		&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
	);
	expect(&data, 4, 2);
}

#[test]
fn star_absorbs_one_leaf_with_the_center() {
	let data = graph(&["x", "l1", "l2", "l3"], &[("x", "l1"), ("x", "l2"), ("x", "l3")]);
	expect(&data, 4, 2);
}

#[test]
fn sticky_policy_keeps_rejected_start_nodes() {
	let data = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
	let config = MetricsConfig {
		visit_policy: VisitPolicy::Sticky,
	};
	let report = analyze(&data, &config);
	assert_eq!(report.path_components, vec![vec!["b".to_string(), "c".to_string()]]);
	assert_eq!(
		report.metrics,
		GraphMetrics {
			segment_number: 3,
			line_cover_number: 1,
		}
	);
}

#[test]
fn repeated_calls_agree() {
	let data = graph(
		&["a", "b", "c", "d", "e", "f"],
		&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("e", "f")],
	);
	let before = data.clone();
	assert_eq!(metrics(&data), metrics(&data));
	assert_eq!(data, before);
}

#[test]
fn node_order_does_not_change_results() {
	let fixtures = [
		graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]),
		graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")]),
		graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]),
		graph(&["x", "l1", "l2", "l3"], &[("x", "l1"), ("x", "l2"), ("x", "l3")]),
		graph(&["a", "b", "c", "d", "e"], &[("a", "b"), ("d", "e")]),
	];

	for data in &fixtures {
		let expected = metrics(data);
		for nodes in permutations(&data.nodes) {
			assert_eq!(
				compute_graph_metrics(&nodes, &data.links),
				expected,
				"order {:?}",
				nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>()
			);
		}
	}
}

#[test]
fn triangle_with_tail_depends_on_where_walks_start() {
	let links = [("t", "a"), ("a", "b"), ("b", "c"), ("c", "a")];
	// Starting at the tail absorbs everything: t-a, then b-c.
	expect(&graph(&["t", "a", "b", "c"], &links), 4, 0);
	// b and c are rejected before the tail walk frees them up, so they stay
	// behind as a one-edge residual graph.
	expect(&graph(&["c", "a", "b", "t"], &links), 3, 1);
}

#[test]
fn line_cover_never_exceeds_residual_nodes() {
	for n in 1..40 {
		let nodes: Vec<String> = (0..n).map(|i| i.to_string()).collect();
		let mut links = Vec::new();
		for i in 0..n {
			for j in (i + 1)..n {
				if rand_simple(i * 131 + j * 7 + n) < 0.12 {
					links.push(GraphLink::new(nodes[i].as_str(), nodes[j].as_str()));
				}
			}
		}
		let data = GraphData {
			nodes: nodes.iter().map(|id| GraphNode::new(id.as_str())).collect(),
			links,
		};

		let report = analyze(&data, &MetricsConfig::default());
		assert!(report.metrics.line_cover_number <= report.residual_node_count);
		assert!(report.path_node_count + report.residual_node_count == n);
		assert!(
			report.metrics.segment_number
				<= report.residual_node_count + report.path_node_count
		);
	}
}

#[test]
fn dangling_references_do_not_crash() {
	let data = graph(&["a", "b", "c"], &[("a", "b"), ("b", "ghost"), ("c", "phantom")]);
	expect(&data, 3, 1);
}

#[test]
fn object_and_string_endpoints_are_equivalent() {
	let json = r#"{
		"nodes": [{"id": "a", "x": 1.0}, {"id": "b"}, {"id": "c"}],
		"links": [
			{"id": "a-b", "source": {"id": "a", "x": 1.0}, "target": "b"},
			{"source": "b", "target": {"id": "c", "fy": 4.0}},
			{"source": {"id": "c"}, "target": {"id": "a"}}
		]
	}"#;
	let data: GraphData = serde_json::from_str(json).unwrap();
	let plain = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
	assert_eq!(metrics(&data), metrics(&plain));
}

#[test]
fn duplicate_node_ids_keep_the_first() {
	let data = graph(&["a", "b", "a"], &[("a", "b")]);
	expect(&data, 2, 0);
}

#[test]
fn metrics_serialize_for_the_page() {
	let data = graph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")]);
	let json = serde_json::to_value(metrics(&data)).unwrap();
	assert_eq!(
		json,
		serde_json::json!({"segmentNumber": 4, "lineCoverNumber": 0})
	);
}
