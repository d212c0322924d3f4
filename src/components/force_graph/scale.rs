//! Zoom-dependent sizes for graph visuals.
//!
//! Sizes are given in world units (graph coordinates) or screen pixels, and
//! [`ScaledValues`] turns them into world-space values for the current zoom
//! level `k`, ready to use after the canvas transform is applied.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
#[allow(
	dead_code,
	reason = "World completes the set for callers tuning ScaleConfig"
)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom level `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom level below which labels stop shrinking.
	pub label_min_k: f64,
}

#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	pub line_width: f64,
	pub width_behavior: ScaleBehavior,
	/// Dash pattern (dash, gap) in world units, used for path-component edges.
	pub dash_pattern: (f64, f64),
	/// Hover ring stroke in screen pixels.
	pub ring_width: f64,
}

#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 7.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 5.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 12.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 11.0,
				label_min_k: 0.5,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				width_behavior: ScaleBehavior::Screen,
				dash_pattern: (6.0, 4.0),
				ring_width: 1.5,
			},
		}
	}
}

/// Scale values for one frame at a fixed zoom level.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub node_radius: f64,
	pub hit_radius: f64,
	/// Label font (e.g., "11px sans-serif").
	pub label_font: String,
	pub edge_line_width: f64,
	pub dash_pattern: (f64, f64),
	pub ring_width: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font: format!("{}px sans-serif", label_font_size),
			edge_line_width: config.edge.width_behavior.apply(config.edge.line_width, k),
			dash_pattern: config.edge.dash_pattern,
			ring_width: ScaleBehavior::Screen.apply(config.edge.ring_width, k),
		}
	}
}
