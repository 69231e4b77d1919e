//! Startup configuration
//!
//! Persisted as JSON in LocalStorage on the web; native runs use defaults.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim::{ExplosionKind, Sprite};

/// Initial parameters for one sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    /// Circle center; random when absent
    #[serde(default)]
    pub position: Option<(f64, f64)>,
    /// Circle radius; random when absent
    #[serde(default)]
    pub radius: Option<f64>,
    pub color: String,
    pub speed: f64,
    pub label: String,
    pub explode_at: u32,
    #[serde(default)]
    pub explosion: ExplosionKind,
}

/// Random radius and center shared by every sprite that doesn't set its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: DVec2,
    pub radius: f64,
}

impl Placement {
    /// Radius in [30, 80) whole pixels, center keeping the circle on screen
    pub fn random<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let radius = rng.random_range(30u32..80) as f64;
        let x = rng.random::<f64>() * (width - 2.0 * radius) + radius;
        let y = rng.random::<f64>() * (height - 2.0 * radius) + radius;
        Self {
            center: DVec2::new(x, y),
            radius,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sprites in draw order
    pub sprites: Vec<SpriteConfig>,
    /// RNG seed; the web build uses the current time when unset
    pub seed: Option<u64>,

    // === Native headless runs ===
    /// Surface size (width, height)
    pub headless_viewport: (u32, u32),
    /// Frames to run before exiting
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprites: vec![
                SpriteConfig {
                    position: None,
                    radius: None,
                    color: "blue".to_string(),
                    speed: 6.0,
                    label: "Tec".to_string(),
                    explode_at: 10,
                    explosion: ExplosionKind::Hearts,
                },
                SpriteConfig {
                    position: None,
                    radius: None,
                    color: "red".to_string(),
                    speed: 2.0,
                    label: "Tec".to_string(),
                    explode_at: 5,
                    explosion: ExplosionKind::Flowers,
                },
            ],
            seed: None,
            headless_viewport: (1280, 720),
            headless_frames: 3600,
        }
    }
}

impl Settings {
    /// Build the configured sprites for a `width` x `height` surface
    pub fn build_sprites<R: Rng + ?Sized>(
        &self,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Vec<Sprite> {
        let placement = Placement::random(width, height, rng);

        self.sprites
            .iter()
            .map(|config| {
                Sprite::new(
                    config.position.map(DVec2::from).unwrap_or(placement.center),
                    config.radius.unwrap_or(placement.radius),
                    config.color.clone(),
                    config.speed,
                    config.label.clone(),
                    config.explode_at,
                    config.explosion,
                )
            })
            .collect()
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_burst_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_scene() {
        let settings = Settings::default();
        assert_eq!(settings.sprites.len(), 2);

        let blue = &settings.sprites[0];
        assert_eq!(blue.color, "blue");
        assert_eq!(blue.speed, 6.0);
        assert_eq!(blue.explode_at, 10);
        assert_eq!(blue.explosion, ExplosionKind::Hearts);

        let red = &settings.sprites[1];
        assert_eq!(red.color, "red");
        assert_eq!(red.speed, 2.0);
        assert_eq!(red.explode_at, 5);
        assert_eq!(red.explosion, ExplosionKind::Flowers);
    }

    #[test]
    fn test_default_sprites_share_placement() {
        let mut rng = Pcg32::seed_from_u64(5);
        let sprites = Settings::default().build_sprites(1024.0, 768.0, &mut rng);

        assert_eq!(sprites.len(), 2);
        assert_eq!(sprites[0].pos, sprites[1].pos);
        assert_eq!(sprites[0].radius, sprites[1].radius);
        assert_eq!(sprites[0].vel, DVec2::splat(6.0));
        assert_eq!(sprites[1].vel, DVec2::splat(2.0));
    }

    #[test]
    fn test_placement_on_screen() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let p = Placement::random(640.0, 480.0, &mut rng);
            assert!(p.radius >= 30.0 && p.radius < 80.0);
            assert_eq!(p.radius.fract(), 0.0);
            assert!(p.center.x - p.radius >= 0.0 && p.center.x + p.radius <= 640.0);
            assert!(p.center.y - p.radius >= 0.0 && p.center.y + p.radius <= 480.0);
        }
    }

    #[test]
    fn test_explicit_position_and_radius() {
        let json = r#"{
            "sprites": [
                { "position": [100.0, 120.0], "radius": 25.0, "color": "green",
                  "speed": 3.0, "label": "X", "explode_at": 2, "explosion": "confetti" }
            ]
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.headless_frames, Settings::default().headless_frames);
        assert_eq!(settings.seed, None);

        let mut rng = Pcg32::seed_from_u64(1);
        let sprites = settings.build_sprites(800.0, 600.0, &mut rng);
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].pos, DVec2::new(100.0, 120.0));
        assert_eq!(sprites[0].radius, 25.0);
        assert_eq!(sprites[0].explosion, ExplosionKind::Flowers);
    }

    #[test]
    fn test_roundtrip_default() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sprites, Settings::default().sprites);
    }
}
