//! Host-supplied state read by the simulation each frame.

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasDimensions {
	pub width: f64,
	pub height: f64,
}

impl CanvasDimensions {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}
}

/// Last known pointer position, or `None` once it left the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	position: Option<(f64, f64)>,
}

impl PointerState {
	pub const fn at(x: f64, y: f64) -> Self {
		Self {
			position: Some((x, y)),
		}
	}

	pub const fn absent() -> Self {
		Self { position: None }
	}

	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	pub fn is_present(&self) -> bool {
		self.position.is_some()
	}
}
