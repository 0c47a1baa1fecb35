//! The collection of background particles.

use log::info;
use rand::Rng;

use super::particle::Particle;
use super::surface::Surface;
use super::theme::ParticleStyle;
use super::types::{CanvasDimensions, PointerState};

/// Canvas area (px²) per spawned particle.
pub const AREA_PER_PARTICLE: f64 = 10_000.0;

/// Number of particles for a canvas: one per [`AREA_PER_PARTICLE`], rounded down.
pub fn particle_count(bounds: CanvasDimensions) -> usize {
	let area = bounds.area();
	if area.is_finite() && area > 0.0 {
		(area / AREA_PER_PARTICLE).floor() as usize
	} else {
		0
	}
}

/// Manages the background particles.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	pub fn new() -> Self {
		Self::default()
	}

	/// Drop every particle and spawn a fresh set sized to `bounds`.
	pub fn initialize<R: Rng + ?Sized>(
		&mut self,
		bounds: CanvasDimensions,
		style: &ParticleStyle,
		rng: &mut R,
	) {
		let count = particle_count(bounds);
		self.particles.clear();
		self.particles.reserve(count);
		self.particles
			.extend((0..count).map(|_| Particle::random(rng, bounds, style)));

		info!(
			"particle-backdrop: seeded {} particles for {}x{}",
			count, bounds.width, bounds.height
		);
	}

	/// Update every particle in order.
	pub fn update_all(&mut self, pointer: PointerState, bounds: CanvasDimensions) {
		for p in &mut self.particles {
			p.update(pointer, bounds);
		}
	}

	/// Update then draw each particle in turn.
	pub fn update_and_draw<S: Surface + ?Sized>(
		&mut self,
		pointer: PointerState,
		bounds: CanvasDimensions,
		surface: &mut S,
	) {
		for p in &mut self.particles {
			p.update(pointer, bounds);
			p.draw(surface);
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::particle::Shape;
	use crate::components::particle_field::surface::recording::RecordingSurface;
	use crate::components::particle_field::theme::Theme;

	fn seeded(bounds: CanvasDimensions, seed: u64) -> ParticleField {
		let mut field = ParticleField::new();
		let mut rng = StdRng::seed_from_u64(seed);
		field.initialize(bounds, &Theme::default().particles, &mut rng);
		field
	}

	#[test]
	fn count_follows_canvas_area() {
		for (w, h, expected) in [
			(100.0, 100.0, 1),
			(1920.0, 1080.0, 207),
			(99.0, 100.0, 0),
			(1280.0, 720.0, 92),
			(0.0, 500.0, 0),
		] {
			let field = seeded(CanvasDimensions::new(w, h), 3);
			assert_eq!(field.len(), expected, "{}x{}", w, h);
		}
	}

	#[test]
	fn spawned_particles_respect_ranges() {
		let bounds = CanvasDimensions::new(640.0, 480.0);
		let field = seeded(bounds, 11);
		assert!(!field.is_empty());

		for p in field.particles() {
			assert!((0.0..bounds.width).contains(&p.x));
			assert!((0.0..bounds.height).contains(&p.y));
			assert!((4.0..8.0).contains(&p.size));
			assert!((1.0..31.0).contains(&p.density));
			assert!((-0.5..0.5).contains(&p.vx));
			assert!((-0.5..0.5).contains(&p.vy));
			assert!(p.rotation_speed.abs() <= 0.005);
			assert_eq!((p.base_x, p.base_y), (p.x, p.y));
		}
	}

	#[test]
	fn every_shape_shows_up() {
		let field = seeded(CanvasDimensions::new(1920.0, 1080.0), 5);
		for shape in [Shape::Hexagon, Shape::Triangle, Shape::Square] {
			assert!(field.particles().iter().any(|p| p.shape == shape));
		}
	}

	#[test]
	fn reinitializing_rerandomizes_with_same_count() {
		let bounds = CanvasDimensions::new(800.0, 600.0);
		let mut field = ParticleField::new();
		let mut rng = StdRng::seed_from_u64(42);
		let style = Theme::default().particles;

		field.initialize(bounds, &style, &mut rng);
		let first: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		field.initialize(bounds, &style, &mut rng);
		let second: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		assert_eq!(first.len(), second.len());
		assert_ne!(first, second);
	}

	#[test]
	fn resize_replaces_whole_field() {
		let mut field = seeded(CanvasDimensions::new(800.0, 600.0), 1);
		assert_eq!(field.len(), 48);

		let mut rng = StdRng::seed_from_u64(2);
		field.initialize(
			CanvasDimensions::new(200.0, 100.0),
			&Theme::default().particles,
			&mut rng,
		);
		assert_eq!(field.len(), 2);
		assert!(field.particles().iter().all(|p| p.x < 200.0 && p.y < 100.0));
	}

	#[test]
	fn update_and_draw_interleaves_per_particle() {
		let bounds = CanvasDimensions::new(400.0, 300.0);
		let mut field = seeded(bounds, 9);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		let mut surface = RecordingSurface::default();
		field.update_and_draw(PointerState::absent(), bounds, &mut surface);

		assert_eq!(surface.fills(), field.len());
		for (p, (x, y)) in field.particles().iter().zip(before) {
			assert!((p.x - x - p.vx).abs() < 1e-9);
			assert!((p.y - y - p.vy).abs() < 1e-9);
		}
	}
}
