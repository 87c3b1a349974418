//! Inter-task communication
//!
//! The frame queue is the only coupling between the acquisition and
//! display tasks; the mode cell is shared between the button edge
//! handler and the display task. Both are static so every task (and
//! the button interrupt path) can reach them without ownership
//! gymnastics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use aither_core::mode::ModeCell;
use aither_core::queue::FrameQueue;

/// Frame queue capacity
pub const FRAME_QUEUE_DEPTH: usize = 20;

/// Telemetry frames in flight from acquisition to the display
pub static FRAME_QUEUE: FrameQueue<CriticalSectionRawMutex, FRAME_QUEUE_DEPTH> = FrameQueue::new();

/// Active display view, cycled by the mode button
pub static DISPLAY_MODE: ModeCell = ModeCell::new();
