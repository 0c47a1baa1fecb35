//! Errors raised while wiring the backdrop into the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Host setup failures. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
	/// No global `window` (not running in a browser main thread).
	#[error("no window available")]
	NoWindow,

	/// The canvas refused to hand out a 2d context.
	#[error("canvas has no 2d rendering context")]
	NoContext,

	/// A browser API threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_display_is_informative() {
		assert!(Error::NoContext.to_string().contains("2d"));
		assert_eq!(
			Error::Js("boom".into()).to_string(),
			"javascript error: boom"
		);
	}
}
