//! Embassy async tasks
//!
//! Each task runs independently; the frame queue and the mode cell in
//! `channels` are the only couplings between them.

pub mod acquisition;
pub mod button;
pub mod display;

pub use acquisition::{acquisition_task, AcquisitionConfig};
pub use button::button_task;
pub use display::display_task;
