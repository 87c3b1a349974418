//! Display renderer
//!
//! Sequences the clear / draw / finalize calls for the splash stages
//! and the per-frame views. A failed draw still finalizes the surface
//! so the panel is left in a defined state, and the error is returned
//! for the caller to log; nothing here aborts the render loop.

use crate::frame::TelemetryFrame;
use crate::mode::DisplayMode;
use crate::render::views;
use crate::traits::{DrawError, DrawSurface};

/// Fixed boot-status line drawn by the first splash stage
pub const BOOT_STATUS: &str = "sys_init OK sys_sens OK sys_boot OK starting ...";

/// Welcome banner drawn by the second splash stage
pub const WELCOME_BANNER: &str = "-WELCOME-";

/// Pixel position of the centered welcome banner
const WELCOME_POS: (i32, i32) = (16, 16);

/// Turns (frame, mode) pairs into drawn frames on a bitmap surface
pub struct Renderer<S: DrawSurface> {
    surface: S,
}

impl<S: DrawSurface> Renderer<S> {
    /// Wrap an initialized draw surface
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// First splash stage: boot-status line at the origin
    ///
    /// The caller holds the inter-stage delay; draw failures are
    /// non-fatal and the sequence still advances.
    pub fn draw_boot_banner(&mut self) -> Result<(), DrawError> {
        self.present(BOOT_STATUS, 0, 0)
    }

    /// Second splash stage: centered welcome banner
    pub fn draw_welcome(&mut self) -> Result<(), DrawError> {
        self.present(WELCOME_BANNER, WELCOME_POS.0, WELCOME_POS.1)
    }

    /// Draw the view selected by `mode` for one telemetry frame
    ///
    /// The air quality view is suppressed while the staleness guard
    /// holds (both readings zero); the surface is left untouched for
    /// that cycle.
    pub fn draw_frame(
        &mut self,
        frame: &TelemetryFrame,
        mode: DisplayMode,
        uptime_ms: u64,
    ) -> Result<(), DrawError> {
        match mode {
            DisplayMode::Temperature => {
                let line = views::format_temperature_line(frame);
                self.present(&line, 0, 0)
            }
            DisplayMode::AirQuality => {
                if !frame.is_air_quality_fresh() {
                    return Ok(());
                }
                let block = views::format_air_quality(frame);
                self.present(&block, 0, 0)
            }
            DisplayMode::SystemStats => {
                let block = views::format_stats(frame, uptime_ms);
                self.present(&block, 0, 0)
            }
        }
    }

    /// Clear, draw, finalize; finalize runs even when the draw fails
    fn present(&mut self, text: &str, x: i32, y: i32) -> Result<(), DrawError> {
        self.surface.clear(true);
        let drawn = self.surface.draw_text(text, x, y);
        self.surface.finalize();
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    /// Records the call sequence instead of driving a panel
    #[derive(Default)]
    struct RecordingSurface {
        drawn: Vec<String<64>, 8>,
        clears: usize,
        finalizes: usize,
        fail_draws: bool,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, _reset_origin: bool) {
            self.clears += 1;
        }

        fn draw_text(&mut self, text: &str, _x: i32, _y: i32) -> Result<(), DrawError> {
            if self.fail_draws {
                return Err(DrawError::Bus);
            }
            let mut copy = String::new();
            let _ = copy.push_str(text);
            let _ = self.drawn.push(copy);
            Ok(())
        }

        fn finalize(&mut self) {
            self.finalizes += 1;
        }
    }

    fn reference_frame() -> TelemetryFrame {
        let mut frame = TelemetryFrame::new();
        frame.temperature_primary = 20.0;
        frame.temperature_secondary = 22.0;
        frame.relative_humidity = 50.0;
        frame.pressure_kpa = 101.3;
        frame
    }

    #[test]
    fn test_temperature_view_draws_mean() {
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer
            .draw_frame(&reference_frame(), DisplayMode::Temperature, 0)
            .unwrap();

        let surface = &renderer.surface;
        assert_eq!(surface.drawn.len(), 1);
        assert!(surface.drawn[0].contains("21.0"));
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.finalizes, 1);
    }

    #[test]
    fn test_stale_air_quality_is_suppressed() {
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer
            .draw_frame(&reference_frame(), DisplayMode::AirQuality, 0)
            .unwrap();

        // No clear, no draw, no finalize: the surface keeps the last view
        let surface = &renderer.surface;
        assert!(surface.drawn.is_empty());
        assert_eq!(surface.clears, 0);
        assert_eq!(surface.finalizes, 0);
    }

    #[test]
    fn test_fresh_air_quality_is_drawn() {
        let mut frame = reference_frame();
        frame.eco2_ppm = 450;
        frame.etvoc_ppb = 120;

        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer
            .draw_frame(&frame, DisplayMode::AirQuality, 0)
            .unwrap();

        let drawn = &renderer.surface.drawn;
        assert_eq!(drawn.len(), 1);
        assert!(drawn[0].contains("450 ppm"));
        assert!(drawn[0].contains("120 ppb"));
    }

    #[test]
    fn test_stats_view() {
        let mut frame = reference_frame();
        frame.battery_mv = 3812;

        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer
            .draw_frame(&frame, DisplayMode::SystemStats, 61_001)
            .unwrap();

        let drawn = &renderer.surface.drawn;
        assert_eq!(drawn.len(), 1);
        assert!(drawn[0].contains("3812 mV"));
        assert!(drawn[0].contains("0:01:01.001"));
    }

    #[test]
    fn test_splash_stages() {
        let mut renderer = Renderer::new(RecordingSurface::default());
        renderer.draw_boot_banner().unwrap();
        renderer.draw_welcome().unwrap();

        let drawn = &renderer.surface.drawn;
        assert_eq!(drawn.len(), 2);
        assert!(drawn[0].contains("sys_boot OK"));
        assert_eq!(drawn[1].as_str(), WELCOME_BANNER);
    }

    #[test]
    fn test_draw_failure_still_finalizes() {
        let mut renderer = Renderer::new(RecordingSurface {
            fail_draws: true,
            ..Default::default()
        });

        let result = renderer.draw_frame(&reference_frame(), DisplayMode::Temperature, 0);
        assert_eq!(result, Err(DrawError::Bus));

        // Surface still presented so the panel is in a defined state
        assert_eq!(renderer.surface.clears, 1);
        assert_eq!(renderer.surface.finalizes, 1);
    }
}
