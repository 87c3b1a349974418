//! View formatting
//!
//! One function per display view, each producing the exact string the
//! renderer hands to the draw surface. All readings are shown to one
//! decimal place; padding inside the strings positions values on the
//! display rows of the 128x64 panel.

use core::fmt::Write;

use heapless::String;

use crate::frame::TelemetryFrame;

/// Maximum length of a formatted view
pub const VIEW_LEN: usize = 64;

/// Temperature view: mean of the two temperature channels, humidity,
/// pressure
///
/// The trailing space run before the pressure value wraps it onto its
/// own display row.
pub fn format_temperature_line(frame: &TelemetryFrame) -> String<VIEW_LEN> {
    let mut line = String::new();
    let _ = write!(
        line,
        "Temp: {:.1}C RHum: {:.1}% Pressure:     {:.1}kPa",
        frame.mean_temperature(),
        frame.relative_humidity,
        frame.pressure_kpa,
    );
    line
}

/// Air quality view: eCO2 and eTVOC as two labelled blocks on separate
/// display rows
pub fn format_air_quality(frame: &TelemetryFrame) -> String<VIEW_LEN> {
    let mut block = String::new();
    let _ = write!(
        block,
        "eCO2:\n{} ppm\n\netVOC:\n{} ppb",
        frame.eco2_ppm, frame.etvoc_ppb,
    );
    block
}

/// System stats view: battery voltage and uptime
pub fn format_stats(frame: &TelemetryFrame, uptime_ms: u64) -> String<VIEW_LEN> {
    let mut block = String::new();
    let _ = write!(
        block,
        "Batt: {} mV\n\nUp: {}",
        frame.battery_mv,
        format_uptime(uptime_ms),
    );
    block
}

/// Human-readable uptime, `H:MM:SS.mmm`, from a monotonic millisecond
/// clock; hours are unbounded (a u64 clock tops out at 13 hour digits,
/// which the buffer covers without truncation)
pub fn format_uptime(uptime_ms: u64) -> String<24> {
    let millis = uptime_ms % 1000;
    let seconds = (uptime_ms / 1000) % 60;
    let minutes = (uptime_ms / 60_000) % 60;
    let hours = uptime_ms / 3_600_000;

    let mut text = String::new();
    let _ = write!(text, "{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis);
    text
}
