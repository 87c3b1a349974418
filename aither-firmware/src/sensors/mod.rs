//! Onboard sensor drivers
//!
//! Thin register-level drivers for the handheld's sensor suite, each
//! implementing one of the core reader traits over a (shared) blocking
//! I2C bus. Device bring-up checks WHO_AM_I and configures a 1 Hz-class
//! output rate; a failed bring-up is a fatal startup error for the
//! acquisition task.

pub mod ccs811;
pub mod hts221;
pub mod lis2dh12;
pub mod lps22hb;
pub mod vbat;

pub use ccs811::Ccs811;
pub use hts221::Hts221;
pub use lis2dh12::Lis2dh12;
pub use lps22hb::Lps22hb;
pub use vbat::VbatMonitor;
