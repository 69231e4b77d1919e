//! Sprite simulation
//!
//! Everything here runs one frame at a time on a single thread:
//! - Seeded RNG only, owned by the driver
//! - Stable iteration order (registration order)
//! - Drawing goes through `renderer::Surface`, page effects through `platform::Backdrop`

pub mod driver;
pub mod particle;
pub mod sprite;

pub use driver::FrameDriver;
pub use particle::{ExplosionKind, Particle, burst};
pub use sprite::{Sprite, SpriteEvent};
