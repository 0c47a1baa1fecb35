//! Drifting polygonal particles and their response to the pointer.

use std::f64::consts::TAU;

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use super::surface::Surface;
use super::theme::{Color, ParticleStyle};
use super::types::{CanvasDimensions, PointerState};

/// Distance (px) within which the pointer pushes particles away.
pub const REPULSION_RADIUS: f64 = 100.0;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Outline drawn for a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Hexagon,
	Triangle,
	Square,
}

impl Distribution<Shape> for Standard {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
		match rng.gen_range(0..3) {
			0 => Shape::Hexagon,
			1 => Shape::Triangle,
			_ => Shape::Square,
		}
	}
}

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Spawn position, kept for reference only.
	pub base_x: f64,
	pub base_y: f64,
	pub size: f64,
	pub color: Color,
	pub vx: f64,
	pub vy: f64,
	pub shape: Shape,
	/// Repulsion multiplier; denser particles get pushed further.
	pub density: f64,
	pub angle: f64,
	pub rotation_speed: f64,
}

impl Particle {
	/// Spawn a particle at a random spot inside `bounds`.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: CanvasDimensions, style: &ParticleStyle) -> Self {
		let size = rng.gen_range(style.size_min..style.size_max);
		let x = sample_axis(rng, bounds.width);
		let y = sample_axis(rng, bounds.height);

		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			size,
			color: style.color,
			vx: rng.gen_range(-0.5..0.5),
			vy: rng.gen_range(-0.5..0.5),
			shape: rng.r#gen(),
			density: rng.gen_range(1.0..31.0),
			angle: rng.gen_range(0.0..TAU),
			rotation_speed: rng.gen_range(-0.005..0.005),
		}
	}

	/// Advance one frame: repulsion, edge wrap, drift, rotation, in that order.
	pub fn update(&mut self, pointer: PointerState, bounds: CanvasDimensions) {
		if let Some((px, py)) = pointer.position() {
			self.repel_from(px, py);
		}

		if self.x < -self.size {
			self.x = bounds.width + self.size;
		}
		if self.x > bounds.width + self.size {
			self.x = -self.size;
		}
		if self.y < -self.size {
			self.y = bounds.height + self.size;
		}
		if self.y > bounds.height + self.size {
			self.y = -self.size;
		}

		self.x += self.vx;
		self.y += self.vy;
		self.angle = (self.angle + self.rotation_speed).rem_euclid(TAU);
	}

	fn repel_from(&mut self, px: f64, py: f64) {
		let (dx, dy) = (px - self.x, py - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		// No direction to push along when sitting exactly under the pointer.
		if distance == 0.0 || distance >= REPULSION_RADIUS {
			return;
		}

		let force = (REPULSION_RADIUS - distance) / REPULSION_RADIUS;
		self.x -= dx / distance * force * self.density;
		self.y -= dy / distance * force * self.density;
	}

	/// Fill the particle's outline at its position and rotation.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		let s = self.size;

		surface.save();
		surface.translate(self.x, self.y);
		surface.rotate(self.angle);
		surface.begin_path();

		match self.shape {
			Shape::Hexagon => {
				surface.move_to(s, 0.0);
				for i in 1..=6 {
					let theta = i as f64 * TAU / 6.0;
					surface.line_to(s * theta.cos(), s * theta.sin());
				}
			}
			Shape::Triangle => {
				surface.move_to(0.0, -s);
				surface.line_to(s * HALF_SQRT_3, s * 0.5);
				surface.line_to(-s * HALF_SQRT_3, s * 0.5);
			}
			Shape::Square => {
				let half = s / 1.4;
				surface.rect(-half, -half, half * 2.0, half * 2.0);
			}
		}

		surface.close_path();
		surface.fill(self.color);
		surface.restore();
	}
}

/// Uniform in `[0, extent)`, or 0 for an empty axis.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
	if extent > 0.0 {
		rng.gen_range(0.0..extent)
	} else {
		0.0
	}
}
