//! Frame driver
//!
//! Owns the sprites and the RNG. One call to [`FrameDriver::step`] is one
//! frame: clear the surface, then advance every sprite in registration
//! order. The platform runners decide when the next step happens.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::sprite::{Sprite, SpriteEvent};
use crate::platform::Backdrop;
use crate::renderer::Surface;
use crate::settings::Settings;

pub struct FrameDriver {
    sprites: Vec<Sprite>,
    rng: Pcg32,
    seed: u64,
    frame: u64,
}

impl FrameDriver {
    /// Empty driver with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self {
            sprites: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            frame: 0,
        }
    }

    /// Driver with the configured sprites laid out on a `width` x `height` surface
    pub fn from_settings(settings: &Settings, width: f64, height: f64, seed: u64) -> Self {
        let mut driver = Self::new(seed);
        for sprite in settings.build_sprites(width, height, &mut driver.rng) {
            driver.register(sprite);
        }
        driver
    }

    /// Add a sprite; it is advanced after every sprite registered before it
    pub fn register(&mut self, sprite: Sprite) {
        log::debug!(
            "Registered sprite {} \"{}\" at ({:.1}, {:.1}), r={}, explodes at {} ({})",
            self.sprites.len(),
            sprite.label,
            sprite.pos.x,
            sprite.pos.y,
            sprite.radius,
            sprite.explode_at,
            sprite.explosion.as_str(),
        );
        self.sprites.push(sprite);
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame
    pub fn step(&mut self, surface: &mut dyn Surface, backdrop: &mut dyn Backdrop) {
        surface.clear();

        for (index, sprite) in self.sprites.iter_mut().enumerate() {
            match sprite.advance(surface, backdrop, &mut self.rng) {
                Some(SpriteEvent::Exploded) => log::info!(
                    "Sprite {} exploded after {} bounces (frame {})",
                    index,
                    sprite.bounce_count(),
                    self.frame
                ),
                Some(SpriteEvent::BurnedOut) => {
                    log::debug!("Sprite {} burst burned out (frame {})", index, self.frame)
                }
                None => {}
            }
        }

        self.frame += 1;
    }
}
