//! Battery discharge curve lookup
//!
//! Maps a battery voltage to a remaining-capacity estimate via a
//! piecewise-linear breakpoint table. The estimate is log-only; the
//! telemetry frame carries the raw millivolt value.

/// Remaining capacity in parts per ten thousand (10000 = full)
pub type Pptt = u16;

/// Piecewise-linear discharge curve
///
/// Breakpoints are `(pptt_remaining, millivolts)` sorted from full to
/// empty (descending in both columns). Lookups clamp outside the table
/// and interpolate linearly between the two bracketing points.
#[derive(Debug, Clone, Copy)]
pub struct DischargeCurve<'a> {
    points: &'a [(Pptt, u16)],
}

/// Reference curve for the node's single LiMnO2 cell
pub const DEFAULT_CURVE: DischargeCurve<'static> =
    DischargeCurve::new(&[(10_000, 3950), (625, 3550), (0, 3100)]);

impl<'a> DischargeCurve<'a> {
    /// Wrap a breakpoint table; the table must be sorted descending
    pub const fn new(points: &'a [(Pptt, u16)]) -> Self {
        Self { points }
    }

    /// Remaining-capacity estimate for a battery voltage
    pub fn pptt_from_millivolts(&self, mv: u16) -> Pptt {
        let Some(&(full_pptt, full_mv)) = self.points.first() else {
            return 0;
        };
        let &(empty_pptt, empty_mv) = self.points.last().unwrap_or(&(0, 0));

        // Clamp outside the table's range
        if mv >= full_mv {
            return full_pptt;
        }
        if mv <= empty_mv {
            return empty_pptt;
        }

        // Find and interpolate between the bracketing breakpoints
        for window in self.points.windows(2) {
            let (pptt_hi, mv_hi) = window[0];
            let (pptt_lo, mv_lo) = window[1];

            if mv <= mv_hi && mv >= mv_lo {
                let mv_range = (mv_hi - mv_lo) as u32;
                let pptt_range = (pptt_hi - pptt_lo) as u32;
                let offset = (mv - mv_lo) as u32;

                return pptt_lo + (pptt_range * offset / mv_range) as Pptt;
            }
        }

        empty_pptt
    }
}
