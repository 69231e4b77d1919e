//! Native frame loop
//!
//! There is no display to sync to, so frames run back to back for a fixed
//! count against whatever surface is passed in.

use super::Backdrop;
use crate::renderer::RecordingSurface;
use crate::sim::FrameDriver;

/// What a headless run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub draw_calls: usize,
    pub exploded: usize,
    /// Sprites whose burst has fully faded
    pub burned_out: usize,
}

/// Step `driver` `frames` times, draining the surface after each frame
pub fn run(
    driver: &mut FrameDriver,
    surface: &mut RecordingSurface,
    backdrop: &mut dyn Backdrop,
    frames: u64,
) -> HeadlessReport {
    let mut draw_calls = 0;

    for _ in 0..frames {
        driver.step(surface, backdrop);
        draw_calls += surface.take_commands().len();
    }

    let sprites = driver.sprites();
    HeadlessReport {
        frames: driver.frame(),
        draw_calls,
        exploded: sprites.iter().filter(|s| s.is_exploded()).count(),
        burned_out: sprites
            .iter()
            .filter(|s| s.has_burst() && s.particles().is_empty())
            .count(),
    }
}
