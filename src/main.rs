//! Bounce Burst entry point
//!
//! On the web this starts the animation-frame loop; natively it runs the
//! scene headless for a fixed number of frames and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    bounce_burst::platform::web::start()
}

/// Seed for native runs without a configured one
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SEED: u64 = 0x5eed;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_burst::Settings;
    use bounce_burst::platform::{LogBackdrop, headless};
    use bounce_burst::renderer::RecordingSurface;
    use bounce_burst::sim::FrameDriver;

    env_logger::init();
    log::info!("Bounce Burst (native) starting...");

    let settings = Settings::load();
    let (width, height) = settings.headless_viewport;
    let seed = settings.seed.unwrap_or(NATIVE_SEED);

    let mut driver = FrameDriver::from_settings(&settings, width as f64, height as f64, seed);
    let mut surface = RecordingSurface::new(width as f64, height as f64);
    let mut backdrop = LogBackdrop::default();

    log::info!(
        "Running {} frames headless on {}x{}, seed {}",
        settings.headless_frames,
        width,
        height,
        seed
    );

    let report = headless::run(
        &mut driver,
        &mut surface,
        &mut backdrop,
        settings.headless_frames,
    );

    for (index, sprite) in driver.sprites().iter().enumerate() {
        log::info!(
            "Sprite {} \"{}\": {} bounces, exploded: {}, particles left: {}",
            index,
            sprite.caption(),
            sprite.bounce_count(),
            sprite.is_exploded(),
            sprite.particles().len()
        );
    }
    log::info!(
        "Done: {} frames, {} draw calls, {} exploded, {} burned out",
        report.frames,
        report.draw_calls,
        report.exploded,
        report.burned_out
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
