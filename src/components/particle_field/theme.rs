//! Visual theming for the particle backdrop.
//!
//! All colors and layout sizes the renderer uses live here as fixed values.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Sky blue shared by every layer of the backdrop.
const ACCENT: Color = Color::rgb(56, 189, 248);

/// Background grid style.
#[derive(Clone, Debug)]
pub struct GridStyle {
	/// Spacing between grid lines in pixels
	pub cell_size: f64,
	pub color: Color,
	pub line_width: f64,
}

/// Style of the lines joining nearby particles.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Base line color; alpha is computed per pair
	pub color: Color,
	/// Pairs at or beyond this distance are not joined
	pub threshold: f64,
	/// Alpha of a zero-length connection
	pub max_alpha: f64,
	pub line_width: f64,
}

/// Pointer-centered glow.
#[derive(Clone, Debug)]
pub struct SpotlightStyle {
	pub radius: f64,
	pub inner: Color,
	pub outer: Color,
}

/// Particle appearance.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub color: Color,
	/// Minimum particle size (inclusive)
	pub size_min: f64,
	/// Maximum particle size (exclusive)
	pub size_max: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub grid: GridStyle,
	pub connection: ConnectionStyle,
	pub spotlight: SpotlightStyle,
	pub particles: ParticleStyle,
}

impl Theme {
	/// Translucent sky-blue shapes over a slate page.
	pub fn sky() -> Self {
		Self {
			name: "sky",
			grid: GridStyle {
				cell_size: 32.0,
				color: ACCENT.with_alpha(0.05),
				line_width: 1.0,
			},
			connection: ConnectionStyle {
				color: ACCENT,
				threshold: 150.0,
				max_alpha: 0.2,
				line_width: 1.0,
			},
			spotlight: SpotlightStyle {
				radius: 300.0,
				inner: ACCENT.with_alpha(0.15),
				outer: Color::rgba(15, 23, 42, 0.0),
			},
			particles: ParticleStyle {
				color: ACCENT.with_alpha(0.4),
				size_min: 4.0,
				size_max: 8.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::sky()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_uses_hex_for_opaque_colors() {
		assert_eq!(ACCENT.to_css(), "#38bdf8");
		assert_eq!(
			Theme::default().particles.color.to_css(),
			"rgba(56, 189, 248, 0.4)"
		);
	}
}
