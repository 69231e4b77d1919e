//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Page background styling ([`Backdrop`])
//! - The frame loop (`web::run` on the browser, `headless::run` natively)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Host page background, changed as a one-off visual effect
///
/// Best effort: implementations never report failure back to the caller.
pub trait Backdrop {
    fn set_background_image(&mut self, url: &str);
}

/// Backdrop for hosts without a page; just logs the request
#[derive(Debug, Default)]
pub struct LogBackdrop {
    /// Last image requested
    pub current: Option<String>,
}

impl Backdrop for LogBackdrop {
    fn set_background_image(&mut self, url: &str) {
        log::info!("Background image -> {}", url);
        self.current = Some(url.to_string());
    }
}
