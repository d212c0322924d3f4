//! Two-pane layout with a draggable divider.
//!
//! The left pane width is kept in percent of the viewport and clamped to
//! [`MIN_PANE`]..[`MAX_PANE`].

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Narrowest the left pane may get, in percent of the viewport.
pub const MIN_PANE: f64 = 10.0;
/// Widest the left pane may get, in percent of the viewport.
pub const MAX_PANE: f64 = 90.0;

/// Left pane width after dragging the divider `dx` pixels from where a drag
/// started at `start_width` percent.
pub fn dragged_width(start_width: f64, dx: f64, viewport_width: f64) -> f64 {
	if viewport_width <= 0.0 {
		return start_width;
	}
	(start_width + dx * 100.0 / viewport_width).clamp(MIN_PANE, MAX_PANE)
}

fn viewport_width() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

/// Divider state for a two-pane layout, starting at 50/50.
///
/// The owner renders the panes and attaches the handlers: `on_mousemove` and
/// `end_drag` on the container, `on_divider_down` on the divider.
#[derive(Clone, Copy)]
pub struct SplitLayout {
	left_width: RwSignal<f64>,
	/// (client x, left width) at the start of a divider drag.
	drag_start: RwSignal<Option<(f64, f64)>>,
}

impl SplitLayout {
	/// Equal panes, no drag in progress.
	pub fn new() -> Self {
		Self {
			left_width: RwSignal::new(50.0),
			drag_start: RwSignal::new(None),
		}
	}

	/// Starts a drag from the divider.
	pub fn on_divider_down(self) -> impl FnMut(MouseEvent) + 'static {
		move |ev: MouseEvent| {
			ev.prevent_default();
			self.drag_start
				.set(Some((ev.client_x() as f64, self.left_width.get_untracked())));
		}
	}

	/// Resizes the left pane while a drag is active.
	pub fn on_mousemove(self) -> impl FnMut(MouseEvent) + 'static {
		move |ev: MouseEvent| {
			if let Some((start_x, start_width)) = self.drag_start.get_untracked() {
				let dx = ev.client_x() as f64 - start_x;
				self.left_width
					.set(dragged_width(start_width, dx, viewport_width()));
			}
		}
	}

	pub fn end_drag(self) -> impl FnMut(MouseEvent) + 'static {
		move |_: MouseEvent| self.drag_start.set(None)
	}

	/// CSS width of the left pane.
	pub fn left_style(self) -> impl Fn() -> String + Send + Sync + 'static {
		move || format!("{}%", self.left_width.get())
	}

	/// CSS width of the right pane.
	pub fn right_style(self) -> impl Fn() -> String + Send + Sync + 'static {
		move || format!("{}%", 100.0 - self.left_width.get())
	}
}

impl Default for SplitLayout {
	fn default() -> Self {
		Self::new()
	}
}
