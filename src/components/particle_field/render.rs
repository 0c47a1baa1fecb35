//! Frame rendering for the particle backdrop.
//!
//! Layers are drawn back to front, in a fixed order:
//! 1. Background grid
//! 2. Connective lines between nearby particles
//! 3. Pointer spotlight
//! 4. Particles (drawn by the field, after each one updates)

use super::particle::Particle;
use super::surface::{RadialGradient, Surface};
use super::theme::{ConnectionStyle, Theme};
use super::types::{CanvasDimensions, PointerState};

/// Wipe the previous frame.
pub fn clear<S: Surface + ?Sized>(surface: &mut S, bounds: CanvasDimensions) {
	surface.clear_rect(0.0, 0.0, bounds.width, bounds.height);
}

pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, bounds: CanvasDimensions, theme: &Theme) {
	let grid = &theme.grid;
	if grid.cell_size <= 0.0 {
		return;
	}

	let mut x = 0.0;
	while x < bounds.width {
		surface.begin_path();
		surface.move_to(x, 0.0);
		surface.line_to(x, bounds.height);
		surface.stroke(grid.color, grid.line_width);
		x += grid.cell_size;
	}

	let mut y = 0.0;
	while y < bounds.height {
		surface.begin_path();
		surface.move_to(0.0, y);
		surface.line_to(bounds.width, y);
		surface.stroke(grid.color, grid.line_width);
		y += grid.cell_size;
	}
}

/// Line alpha for two particles `distance` apart, or `None` when too far to join.
pub fn connection_alpha(distance: f64, style: &ConnectionStyle) -> Option<f64> {
	if distance < style.threshold {
		Some((1.0 - distance / style.threshold) * style.max_alpha)
	} else {
		None
	}
}

/// Join every pair of particles closer than the connection threshold.
pub fn draw_connections<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	theme: &Theme,
) {
	let style = &theme.connection;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			let Some(alpha) = connection_alpha(distance, style) else {
				continue;
			};

			surface.begin_path();
			surface.move_to(a.x, a.y);
			surface.line_to(b.x, b.y);
			surface.stroke(style.color.with_alpha(alpha), style.line_width);
		}
	}
}

pub fn draw_spotlight<S: Surface + ?Sized>(
	surface: &mut S,
	pointer: PointerState,
	bounds: CanvasDimensions,
	theme: &Theme,
) {
	let Some((x, y)) = pointer.position() else {
		return;
	};

	let gradient = RadialGradient {
		x,
		y,
		radius: theme.spotlight.radius,
		inner: theme.spotlight.inner,
		outer: theme.spotlight.outer,
	};
	surface.fill_rect_with_gradient(&gradient, 0.0, 0.0, bounds.width, bounds.height);
}

pub fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle]) {
	for p in particles {
		p.draw(surface);
	}
}
