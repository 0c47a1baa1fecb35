//! Leptos components rendered by the backdrop.

pub mod particle_field;
