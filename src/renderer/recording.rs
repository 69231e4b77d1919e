//! In-memory surface that records every draw call

use glam::DVec2;

use super::{Paint, Surface, TextStyle};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokeCircle {
        center: DVec2,
        radius: f64,
        color: Paint,
        line_width: f64,
    },
    FillText {
        text: String,
        at: DVec2,
        style: TextStyle,
    },
}

/// Surface that keeps a log of draw calls instead of rasterizing them
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Everything drawn since creation (or the last `take_commands`)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the command log
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, color: &Paint, line_width: f64) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.clone(),
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, at: DVec2, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }
}
