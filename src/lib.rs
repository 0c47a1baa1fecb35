//! particle-backdrop: Interactive particle background for static pages.
//!
//! This crate provides a WASM-based canvas component that renders drifting
//! polygons joined by proximity lines, pushed aside by the pointer and lit by
//! a glow that follows it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Only linked to switch on the `js` entropy source for `rand`.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod error;

pub use components::particle_field::{
	AnimationLoop, BackgroundCanvas, CanvasDimensions, ParticleField, PointerState,
};
pub use error::{Error, Result};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Main application component.
/// Mounts the animated background behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<BackgroundCanvas />
	}
}
