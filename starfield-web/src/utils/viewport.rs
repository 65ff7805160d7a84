//! Environment readings: viewport size and a random seed.

use lib_starfield::Viewport;
use web_sys::window;

/// Current `innerWidth` x `innerHeight`, or [`Viewport::FALLBACK`] when the
/// window cannot report it.
pub fn current_viewport() -> Viewport {
    let Some(window) = window() else {
        log::warn!("No window available, using fallback viewport");
        return Viewport::FALLBACK;
    };

    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => {
            log::warn!("Window size unavailable, using fallback viewport");
            Viewport::FALLBACK
        }
    }
}

/// Seed for a per-mount RNG.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
