//! Interactive particle backdrop.
//!
//! Renders a field of drifting polygons on a full-viewport canvas with:
//! - Pointer repulsion within a fixed radius
//! - Wrap-around at the canvas edges
//! - Proximity lines between nearby particles
//! - A faint grid and a glow following the pointer
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::BackgroundCanvas;
//!
//! view! { <BackgroundCanvas /> }
//! ```

mod animation;
mod component;
mod field;
mod particle;
pub mod render;
pub mod surface;
pub mod theme;
mod types;

pub use animation::{AnimationLoop, LoopState, SimulationContext};
pub use component::BackgroundCanvas;
pub use field::{AREA_PER_PARTICLE, ParticleField, particle_count};
pub use particle::{Particle, REPULSION_RADIUS, Shape};
pub use theme::{Color, Theme};
pub use types::{CanvasDimensions, PointerState};
