//! Browser glue: page setup, page background and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::Backdrop;
use crate::renderer::CanvasSurface;
use crate::settings::Settings;
use crate::sim::FrameDriver;

/// The document body's background
pub struct PageBackdrop {
    body: HtmlElement,
}

impl PageBackdrop {
    pub fn new(body: HtmlElement) -> Self {
        Self { body }
    }
}

impl Backdrop for PageBackdrop {
    fn set_background_image(&mut self, url: &str) {
        let value = format!("url('{}')", url);
        match self.body.style().set_property("background-image", &value) {
            Ok(()) => log::info!("Background image set"),
            Err(e) => log::warn!("Failed to set background image: {:?}", e),
        }
    }
}

/// Transparent canvas over a white page whose background image (once set) covers it
fn style_page(body: &HtmlElement, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.style().set_property("background", "transparent")?;

    let style = body.style();
    style.set_property("background-color", "white")?;
    style.set_property("background-size", "cover")?;
    style.set_property("background-position", "center")?;
    style.set_property("background-repeat", "no-repeat")?;
    Ok(())
}

/// Size `#canvas` to the viewport, build the scene and start the frame loop
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Bounce Burst starting...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| JsValue::from_str("no #canvas element"))?
        .dyn_into()?;

    // Sized once; later resizes are ignored
    let width = window.inner_width()?.as_f64().unwrap_or_default() as u32;
    let height = window.inner_height()?.as_f64().unwrap_or_default() as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    style_page(&body, &canvas)?;

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let driver = FrameDriver::from_settings(&settings, width as f64, height as f64, seed);

    log::info!(
        "Scene ready: {} sprites on {}x{}, seed {}",
        driver.sprites().len(),
        width,
        height,
        seed
    );

    run(
        driver,
        CanvasSurface::new(context, width, height),
        PageBackdrop::new(body),
    );

    Ok(())
}

struct Scene {
    driver: FrameDriver,
    surface: CanvasSurface,
    backdrop: PageBackdrop,
}

/// Step the driver once per animation frame, forever
pub fn run(driver: FrameDriver, surface: CanvasSurface, backdrop: PageBackdrop) {
    let scene = Rc::new(RefCell::new(Scene {
        driver,
        surface,
        backdrop,
    }));
    request_animation_frame(scene);
}

fn request_animation_frame(scene: Rc<RefCell<Scene>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame loop stopped");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame_loop(scene);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn frame_loop(scene: Rc<RefCell<Scene>>) {
    {
        let mut scene = scene.borrow_mut();
        let Scene {
            driver,
            surface,
            backdrop,
        } = &mut *scene;
        driver.step(surface, backdrop);
    }

    request_animation_frame(scene);
}
