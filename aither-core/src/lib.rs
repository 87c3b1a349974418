//! Board-agnostic core logic for the Aither telemetry node firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensors, battery, draw surface)
//! - Telemetry frame assembly and the acquisition cycle
//! - Bounded frame queue with the overflow purge policy
//! - Display mode state machine (button-cycled views)
//! - View formatting and the display renderer
//! - Battery discharge curve lookup

#![no_std]
#![deny(unsafe_code)]

pub mod battery;
pub mod frame;
pub mod mode;
pub mod queue;
pub mod render;
pub mod sample;
pub mod traits;
