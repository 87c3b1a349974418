//! Display mode state machine
//!
//! A small cyclic enumeration of views, advanced one step per rising
//! edge of the mode button and read once per render cycle. The shared
//! cell is a single atomic byte: the button edge handler is the only
//! writer, the renderer the only reader, so a plain load + store is
//! enough and the interrupt context never has to take a lock.

use core::sync::atomic::{AtomicU8, Ordering};

/// The user-selectable display views, in button-cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Mean temperature, humidity, pressure
    #[default]
    Temperature,
    /// eCO2 / eTVOC (suppressed while the sensor warms up)
    AirQuality,
    /// Battery voltage and uptime
    SystemStats,
}

impl DisplayMode {
    /// Number of modes in the cycle
    pub const COUNT: u8 = 3;

    /// Ordinal of this mode
    pub const fn index(self) -> u8 {
        match self {
            DisplayMode::Temperature => 0,
            DisplayMode::AirQuality => 1,
            DisplayMode::SystemStats => 2,
        }
    }

    /// Mode for a raw ordinal, wrapping past the end of the cycle
    ///
    /// Every byte value maps to a valid mode, so a stale or torn read
    /// of the shared cell can never produce an invalid view.
    pub const fn from_index(raw: u8) -> Self {
        match raw % Self::COUNT {
            0 => DisplayMode::Temperature,
            1 => DisplayMode::AirQuality,
            _ => DisplayMode::SystemStats,
        }
    }

    /// Next mode in cyclic order
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Shared mode cell: interrupt-context writer, renderer reader
pub struct ModeCell(AtomicU8);

impl ModeCell {
    /// Create a cell holding the initial mode (`Temperature`)
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Current mode (atomic load, done once per render cycle)
    pub fn get(&self) -> DisplayMode {
        DisplayMode::from_index(self.0.load(Ordering::Relaxed))
    }

    /// Advance to the next mode and return it
    ///
    /// NOTE(no-CAS): the button edge handler is the sole writer, so a
    /// load + store cannot lose an update.
    pub fn advance(&self) -> DisplayMode {
        let next = self.get().next();
        self.0.store(next.index(), Ordering::Relaxed);
        next
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode() {
        let cell = ModeCell::new();
        assert_eq!(cell.get(), DisplayMode::Temperature);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(DisplayMode::Temperature.next(), DisplayMode::AirQuality);
        assert_eq!(DisplayMode::AirQuality.next(), DisplayMode::SystemStats);
        assert_eq!(DisplayMode::SystemStats.next(), DisplayMode::Temperature);
    }

    #[test]
    fn test_n_edges_land_on_n_mod_count() {
        let cell = ModeCell::new();
        for n in 1..=10u8 {
            let mode = cell.advance();
            assert_eq!(mode, DisplayMode::from_index(n % DisplayMode::COUNT));
            assert_eq!(cell.get(), mode);
        }
    }

    #[test]
    fn test_every_raw_value_is_a_valid_mode() {
        for raw in 0..=u8::MAX {
            let mode = DisplayMode::from_index(raw);
            assert!(mode.index() < DisplayMode::COUNT);
        }
    }
}
