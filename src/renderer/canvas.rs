//! Canvas 2D implementation of [`Surface`]

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

use super::{Paint, Surface, TextStyle, is_drawable_radius};

/// A 2D canvas context plus the pixel size it was laid out with
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Set once a circle has been skipped for its radius
    skipped_circle: bool,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            context,
            width: width as f64,
            height: height as f64,
            skipped_circle: false,
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: &Paint, line_width: f64) {
        if !is_drawable_radius(radius) {
            if !self.skipped_circle {
                log::warn!("Not drawing circle outlines with radius {}", radius);
                self.skipped_circle = true;
            }
            return;
        }

        self.context.begin_path();
        self.context.set_stroke_style_str(&color.to_string());
        self.context.set_line_width(line_width);
        match self
            .context
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            Ok(()) => self.context.stroke(),
            Err(e) => log::debug!("arc failed: {:?}", e),
        }
        self.context.close_path();
    }

    fn fill_text(&mut self, text: &str, at: DVec2, style: &TextStyle) {
        if let Some(fill) = &style.fill {
            self.context.set_fill_style_str(&fill.to_string());
        }
        self.context.set_font(style.font);
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");
        if let Err(e) = self.context.fill_text(text, at.x, at.y) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
