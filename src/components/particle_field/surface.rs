//! Drawing surface abstraction.
//!
//! The simulation draws through [`Surface`] rather than the canvas directly so
//! frames can be recorded and inspected off the browser.

use log::warn;
use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Two-stop radial gradient starting at the center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub inner: Color,
	pub outer: Color,
}

/// Minimal 2D drawing API used by the renderer and particles.
pub trait Surface {
	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	fn rotate(&mut self, angle: f64);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn close_path(&mut self);
	fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	/// Fill the current path.
	fn fill(&mut self, color: Color);
	/// Stroke the current path.
	fn stroke(&mut self, color: Color, width: f64);
	fn fill_rect_with_gradient(&mut self, gradient: &RadialGradient, x: f64, y: f64, w: f64, h: f64);
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn close_path(&mut self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::rect(self, x, y, w, h);
	}

	fn fill(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&mut self, color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill_rect_with_gradient(&mut self, gradient: &RadialGradient, x: f64, y: f64, w: f64, h: f64) {
		let canvas_gradient = match self.create_radial_gradient(
			gradient.x,
			gradient.y,
			0.0,
			gradient.x,
			gradient.y,
			gradient.radius,
		) {
			Ok(g) => g,
			Err(e) => {
				warn!("particle-backdrop: failed to create gradient: {:?}", e);
				return;
			}
		};

		let _ = canvas_gradient.add_color_stop(0.0, &gradient.inner.to_css());
		let _ = canvas_gradient.add_color_stop(1.0, &gradient.outer.to_css());

		#[allow(deprecated)]
		self.set_fill_style(&canvas_gradient);
		self.fill_rect(x, y, w, h);
	}

	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
	}
}
