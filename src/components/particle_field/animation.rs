//! Per-frame driver for the backdrop.
//!
//! [`AnimationLoop`] owns everything a frame reads: the particle field, the
//! pointer and canvas size, and the theme. Host events write into it between
//! frames; [`AnimationLoop::tick`] renders one frame and reports whether the
//! caller should schedule another.

use log::debug;
use rand::Rng;

use super::field::ParticleField;
use super::render;
use super::surface::Surface;
use super::theme::Theme;
use super::types::{CanvasDimensions, PointerState};

/// Whether the loop keeps requesting frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Running,
	Stopped,
}

/// Host state read at the start of every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationContext {
	pub pointer: PointerState,
	pub bounds: CanvasDimensions,
}

/// Drives the backdrop one frame at a time.
pub struct AnimationLoop<R: Rng> {
	field: ParticleField,
	context: SimulationContext,
	theme: Theme,
	rng: R,
	state: LoopState,
	frames: u64,
}

impl<R: Rng> AnimationLoop<R> {
	pub fn new(bounds: CanvasDimensions, rng: R) -> Self {
		Self::with_theme(bounds, rng, Theme::default())
	}

	pub fn with_theme(bounds: CanvasDimensions, rng: R, theme: Theme) -> Self {
		let mut anim = Self {
			field: ParticleField::new(),
			context: SimulationContext {
				pointer: PointerState::absent(),
				bounds,
			},
			theme,
			rng,
			state: LoopState::Running,
			frames: 0,
		};
		anim.field
			.initialize(bounds, &anim.theme.particles, &mut anim.rng);
		anim
	}

	/// Render one frame. Returns `true` if another frame should be scheduled.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
		if self.state == LoopState::Stopped {
			return false;
		}

		let SimulationContext { pointer, bounds } = self.context;

		render::clear(surface, bounds);
		render::draw_grid(surface, bounds, &self.theme);
		render::draw_connections(surface, self.field.particles(), &self.theme);
		render::draw_spotlight(surface, pointer, bounds, &self.theme);
		self.field.update_and_draw(pointer, bounds, surface);

		self.frames += 1;
		true
	}

	/// Store the new canvas size and respawn the whole field for it.
	pub fn on_resize(&mut self, bounds: CanvasDimensions) {
		debug!(
			"particle-backdrop: resized to {}x{} after {} frames",
			bounds.width, bounds.height, self.frames
		);
		self.context.bounds = bounds;
		self.field
			.initialize(bounds, &self.theme.particles, &mut self.rng);
	}

	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.context.pointer = PointerState::at(x, y);
	}

	pub fn on_pointer_leave(&mut self) {
		self.context.pointer = PointerState::absent();
	}

	/// Stop requesting frames. Never called by the page itself.
	pub fn stop(&mut self) {
		self.state = LoopState::Stopped;
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	pub fn context(&self) -> SimulationContext {
		self.context
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::particle_field::surface::recording::{Op, RecordingSurface};

	fn running(w: f64, h: f64) -> AnimationLoop<StdRng> {
		AnimationLoop::new(CanvasDimensions::new(w, h), StdRng::seed_from_u64(17))
	}

	fn first_index(ops: &[Op], pred: impl Fn(&Op) -> bool) -> usize {
		ops.iter().position(pred).expect("op not recorded")
	}

	#[test]
	fn frame_layers_in_fixed_order() {
		let mut anim = running(320.0, 320.0);
		anim.on_pointer_move(160.0, 160.0);

		let mut surface = RecordingSurface::default();
		assert!(anim.tick(&mut surface));

		let ops = &surface.ops;
		assert_eq!(ops[0], Op::ClearRect(0.0, 0.0, 320.0, 320.0));
		let grid = first_index(ops, |op| matches!(op, Op::Stroke(..)));
		let spotlight = first_index(ops, |op| matches!(op, Op::GradientRect(_)));
		let first_particle = first_index(ops, |op| matches!(op, Op::Fill(_)));
		let last_stroke = ops
			.iter()
			.rposition(|op| matches!(op, Op::Stroke(..)))
			.expect("grid strokes");

		assert!(grid < spotlight);
		assert!(last_stroke < spotlight);
		assert!(spotlight < first_particle);
		assert_eq!(surface.fills(), anim.field().len());
		assert_eq!(anim.frames(), 1);
	}

	#[test]
	fn no_spotlight_without_pointer() {
		let mut anim = running(200.0, 200.0);
		anim.on_pointer_move(10.0, 10.0);
		anim.on_pointer_leave();

		let mut surface = RecordingSurface::default();
		anim.tick(&mut surface);
		assert!(surface.gradients().is_empty());
		assert_eq!(anim.context().pointer, PointerState::absent());
	}

	#[test]
	fn pointer_events_update_context() {
		let mut anim = running(200.0, 200.0);
		assert!(!anim.context().pointer.is_present());

		anim.on_pointer_move(12.0, 34.0);
		assert_eq!(anim.context().pointer.position(), Some((12.0, 34.0)));
	}

	#[test]
	fn resize_respawns_field() {
		let mut anim = running(100.0, 100.0);
		assert_eq!(anim.field().len(), 1);

		anim.on_resize(CanvasDimensions::new(1000.0, 500.0));
		assert_eq!(anim.field().len(), 50);
		assert_eq!(anim.context().bounds, CanvasDimensions::new(1000.0, 500.0));
	}

	#[test]
	fn stopped_loop_draws_nothing() {
		let mut anim = running(300.0, 300.0);
		assert!(anim.is_running());
		anim.stop();
		assert_eq!(anim.state(), LoopState::Stopped);

		let mut surface = RecordingSurface::default();
		assert!(!anim.tick(&mut surface));
		assert!(surface.ops.is_empty());
		assert_eq!(anim.frames(), 0);
	}
}
