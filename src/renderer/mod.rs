//! Drawing surface abstraction
//!
//! The simulation only ever talks to a [`Surface`]. The browser build draws
//! to a 2D canvas context; tests and native runs use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use std::fmt;

use glam::DVec2;
use rand::Rng;

/// A fill or stroke color
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Any CSS color string ("blue", "#ff0000", ...)
    Css(String),
    /// HSL color, saturation and lightness in percent
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl Paint {
    /// Fully saturated, mid-lightness color with a uniformly random hue in [0, 360)
    pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Paint::Hsl {
            hue: rng.random_range(0.0..360.0),
            saturation: 100.0,
            lightness: 50.0,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Css(color) => f.write_str(color),
            Paint::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

/// How a piece of text is drawn. Text is always centered on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    /// Per-call fill color; `None` keeps whatever fill the surface currently has
    pub fill: Option<Paint>,
}

/// Canvas `arc` throws on negative radii, so those circles are skipped
pub fn is_drawable_radius(radius: f64) -> bool {
    radius >= 0.0
}

/// The 2D raster a frame is drawn onto
///
/// Dimensions are fixed when the surface is created.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Clear the whole surface
    fn clear(&mut self);

    /// Draw an unfilled circle outline
    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: &Paint, line_width: f64);

    /// Draw text anchored at `at`
    fn fill_text(&mut self, text: &str, at: DVec2, style: &TextStyle);
}
