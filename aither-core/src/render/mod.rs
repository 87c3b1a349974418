//! Display rendering
//!
//! View formatting is pure string building over `heapless` buffers so
//! it can be tested on the host; the renderer sequences the actual
//! clear / draw / finalize calls against a [`DrawSurface`].

pub mod renderer;
pub mod views;

pub use renderer::Renderer;
pub use views::{format_air_quality, format_stats, format_temperature_line, format_uptime};
