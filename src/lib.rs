//! Finger Paint core crate.
//!
//! A freehand painting surface for a host web page: pointer and touch input is
//! turned into evenly spaced dots on a retained canvas, with a fixed five-colour
//! palette and a clear button. The drawing model (`surface`, `geometry`,
//! `palette`, `config`) is plain Rust and runs natively; `widget` is the
//! browser layer and is exposed to JS through `init_painting()` and
//! `start_painting()`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod geometry;
pub mod palette;
pub mod surface;
mod widget;

pub use config::{ConfigError, SurfaceConfig};
pub use geometry::Point;
pub use palette::{Palette, PaletteColor};
pub use surface::{Dot, DrawingSurface};
pub use widget::{PaintHandle, init_painting, mount, start_painting};

#[cfg(feature = "serde_json")]
pub use widget::start_painting_with_config;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiated in tests) keeps the first logger.
    console_log::init_with_level(log::Level::Debug).ok();
}
