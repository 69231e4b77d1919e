//! Bouncing sprite
//!
//! A sprite flies in a straight line, reflects off the surface edges and
//! counts every reflection. Once the count reaches its threshold it is
//! replaced by a particle burst for the rest of the run.

use glam::DVec2;
use rand::Rng;

use super::particle::{ExplosionKind, Particle, burst};
use crate::consts::*;
use crate::platform::Backdrop;
use crate::renderer::{Paint, Surface, TextStyle};

/// Something worth reporting that happened during `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEvent {
    /// The sprite crossed its bounce threshold this frame
    Exploded,
    /// The last particle of the burst expired this frame
    BurnedOut,
}

#[derive(Debug, Clone)]
pub struct Sprite {
    /// Circle center
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    /// Outline color
    pub color: Paint,
    pub base_speed: f64,
    pub label: String,
    /// Bounce count at which the sprite explodes
    pub explode_at: u32,
    pub explosion: ExplosionKind,
    bounce_count: u32,
    exploded: bool,
    /// `None` until the first exploded frame, then the (shrinking) batch
    burst: Option<Vec<Particle>>,
}

impl Sprite {
    pub fn new(
        pos: DVec2,
        radius: f64,
        color: impl Into<String>,
        speed: f64,
        label: impl Into<String>,
        explode_at: u32,
        explosion: ExplosionKind,
    ) -> Self {
        Self {
            pos,
            vel: DVec2::splat(speed),
            radius,
            color: Paint::Css(color.into()),
            base_speed: speed,
            label: label.into(),
            explode_at,
            explosion,
            bounce_count: 0,
            exploded: false,
            burst: None,
        }
    }

    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    /// Live particles (empty before the explosion and after burn-out)
    pub fn particles(&self) -> &[Particle] {
        self.burst.as_deref().unwrap_or(&[])
    }

    /// Whether the particle batch has been generated
    pub fn has_burst(&self) -> bool {
        self.burst.is_some()
    }

    /// Text drawn in the middle of the circle
    pub fn caption(&self) -> String {
        format!("{}{}", self.label, self.bounce_count)
    }

    /// Advance one frame: maybe explode, draw, then bounce and move
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        backdrop: &mut dyn Backdrop,
        rng: &mut R,
    ) -> Option<SpriteEvent> {
        let mut event = None;

        // Threshold is checked before drawing, so a bounce that reaches it
        // only takes effect on the following frame.
        if !self.exploded && self.bounce_count >= self.explode_at {
            self.exploded = true;
            if self.explosion == ExplosionKind::Hearts {
                backdrop.set_background_image(HEARTS_BACKGROUND_URL);
            }
            event = Some(SpriteEvent::Exploded);
        }

        if self.exploded {
            if self.draw_burst(surface, rng) {
                event = event.or(Some(SpriteEvent::BurnedOut));
            }
            return event;
        }

        self.draw(surface);
        self.bounce(surface.width(), surface.height());
        event
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_text(
            &self.caption(),
            self.pos,
            &TextStyle {
                font: LABEL_FONT,
                fill: None,
            },
        );
        surface.stroke_circle(self.pos, self.radius, &self.color, OUTLINE_WIDTH);
    }

    /// Returns true when the last particle expired during this call
    fn draw_burst<R: Rng + ?Sized>(&mut self, surface: &mut dyn Surface, rng: &mut R) -> bool {
        let origin = self.pos;
        let kind = self.explosion;
        let particles = self
            .burst
            .get_or_insert_with(|| burst(origin, kind, rng));

        if particles.is_empty() {
            return false;
        }

        for p in particles.iter_mut() {
            p.tick();
            surface.fill_text(
                p.symbol,
                p.pos,
                &TextStyle {
                    font: PARTICLE_FONT,
                    fill: Some(Paint::random_hue(rng)),
                },
            );
        }
        particles.retain(Particle::is_alive);

        particles.is_empty()
    }

    /// Reflect off each touched edge, then move
    fn bounce(&mut self, width: f64, height: f64) {
        if self.pos.x + self.radius > width || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x;
            self.bounce_count = self.bounce_count.saturating_add(1);
        }

        if self.pos.y + self.radius > height || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            self.bounce_count = self.bounce_count.saturating_add(1);
        }

        self.pos += self.vel;
    }
}
