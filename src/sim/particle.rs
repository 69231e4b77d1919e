//! Explosion particles

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which symbol set an explosion uses
///
/// Unknown kinds in configuration fall back to `Flowers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplosionKind {
    /// Hearts only; also swaps the page background when it goes off
    Hearts,
    #[default]
    #[serde(other)]
    Flowers,
}

impl ExplosionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplosionKind::Hearts => "hearts",
            ExplosionKind::Flowers => "flowers",
        }
    }

    /// Glyphs particles are drawn with
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            ExplosionKind::Hearts => HEART_SYMBOLS,
            ExplosionKind::Flowers => FLOWER_SYMBOLS,
        }
    }
}

/// A single glyph flying out of an explosion
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub symbol: &'static str,
    /// Frames left before removal
    pub life: u32,
}

impl Particle {
    /// Random direction, random speed in [PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX)
    pub fn spawn<R: Rng + ?Sized>(origin: DVec2, kind: ExplosionKind, rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let symbol = kind.symbols().choose(rng).copied().unwrap_or_default();

        Self {
            pos: origin,
            vel: DVec2::from_angle(angle) * speed,
            symbol,
            life: PARTICLE_LIFE,
        }
    }

    pub fn tick(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// The full batch of particles for one explosion
pub fn burst<R: Rng + ?Sized>(origin: DVec2, kind: ExplosionKind, rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle::spawn(origin, kind, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_size_and_origin() {
        let mut rng = Pcg32::seed_from_u64(1);
        let origin = DVec2::new(120.0, 80.0);
        let particles = burst(origin, ExplosionKind::Flowers, &mut rng);

        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert_eq!(p.pos, origin);
            assert_eq!(p.life, PARTICLE_LIFE);
            let speed = p.vel.length();
            assert!(speed >= PARTICLE_SPEED_MIN - 1e-9 && speed < PARTICLE_SPEED_MAX + 1e-9);
        }
    }

    #[test]
    fn test_symbol_sets() {
        let mut rng = Pcg32::seed_from_u64(2);
        for p in burst(DVec2::ZERO, ExplosionKind::Hearts, &mut rng) {
            assert_eq!(p.symbol, "❤");
        }
        for p in burst(DVec2::ZERO, ExplosionKind::Flowers, &mut rng) {
            assert!(FLOWER_SYMBOLS.contains(&p.symbol));
        }
    }

    #[test]
    fn test_unknown_kind_falls_back_to_flowers() {
        let kind: ExplosionKind = serde_json::from_str("\"stars\"").unwrap();
        assert_eq!(kind, ExplosionKind::Flowers);
        let kind: ExplosionKind = serde_json::from_str("\"hearts\"").unwrap();
        assert_eq!(kind, ExplosionKind::Hearts);
    }

    #[test]
    fn test_tick_moves_and_ages() {
        let mut p = Particle {
            pos: DVec2::new(1.0, 1.0),
            vel: DVec2::new(2.0, -3.0),
            symbol: "✨",
            life: 2,
        };
        p.tick();
        assert_eq!(p.pos, DVec2::new(3.0, -2.0));
        assert_eq!(p.life, 1);
        assert!(p.is_alive());
        p.tick();
        assert!(!p.is_alive());
        p.tick();
        assert_eq!(p.life, 0);
    }

    proptest! {
        #[test]
        fn prop_life_strictly_decreases(seed in any::<u64>(), frames in 1u32..PARTICLE_LIFE) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = Particle::spawn(DVec2::ZERO, ExplosionKind::Hearts, &mut rng);
            for _ in 0..frames {
                let before = p.life;
                p.tick();
                prop_assert_eq!(p.life, before - 1);
            }
            prop_assert_eq!(p.life, PARTICLE_LIFE - frames);
        }
    }
}
