//! Bounce Burst - bouncing canvas sprites that explode into particles
//!
//! Core modules:
//! - `sim`: Sprites, particles and the per-frame driver
//! - `renderer`: Drawing surface abstraction (canvas + recording)
//! - `platform`: Browser/native glue (page background, frame loop)
//! - `settings`: Startup configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SpriteConfig};

/// Scene constants
pub mod consts {
    /// Particles spawned by one explosion
    pub const PARTICLE_COUNT: usize = 30;
    /// Frames a particle survives
    pub const PARTICLE_LIFE: u32 = 100;
    /// Particle speed range (pixels per frame), upper bound exclusive
    pub const PARTICLE_SPEED_MIN: f64 = 4.0;
    pub const PARTICLE_SPEED_MAX: f64 = 9.0;

    /// Symbol set for hearts explosions
    pub const HEART_SYMBOLS: &[&str] = &["❤"];
    /// Symbol set for every other explosion
    pub const FLOWER_SYMBOLS: &[&str] = &["🌸", "✨", "⭐", "💮"];

    /// Sprite label font
    pub const LABEL_FONT: &str = "20px Arial";
    /// Particle glyph font
    pub const PARTICLE_FONT: &str = "30px Arial";
    /// Circle outline width
    pub const OUTLINE_WIDTH: f64 = 2.0;

    /// Page background shown once a hearts sprite explodes
    pub const HEARTS_BACKGROUND_URL: &str = "https://images.pexels.com/photos/6005373/pexels-photo-6005373.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
}
