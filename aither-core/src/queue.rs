//! Bounded telemetry frame queue
//!
//! Single-producer/single-consumer FIFO decoupling the acquisition
//! cadence from the rendering cadence. Built on the embassy-sync
//! channel so the consumer can park on an empty queue without
//! busy-waiting while the producer side stays strictly non-blocking.
//!
//! Overflow policy: a push against a full queue purges the whole
//! backlog and drops the offered frame too. A backed-up consumer gets
//! a clean slate rather than an ever-growing queue of stale frames.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::frame::TelemetryFrame;

/// Push rejected because the queue is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// Outcome of [`FrameQueue::offer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Offer {
    /// Frame enqueued
    Accepted,
    /// Queue was full: backlog purged, frame dropped
    Purged,
}

/// Bounded FIFO of telemetry frames
///
/// `N` is fixed at construction; the queue never holds more than `N`
/// frames and `pop` never observes more frames than were successfully
/// pushed since the last purge.
pub struct FrameQueue<M: RawMutex, const N: usize> {
    inner: Channel<M, TelemetryFrame, N>,
}

impl<M: RawMutex, const N: usize> FrameQueue<M, N> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Non-blocking push; fails if the queue is at capacity
    pub fn try_push(&self, frame: TelemetryFrame) -> Result<(), QueueFull> {
        self.inner.try_send(frame).map_err(|_| QueueFull)
    }

    /// Producer-side enqueue with the overflow policy applied
    ///
    /// The purge is the response to the failed push; the offered frame
    /// is not retried afterwards. The caller is expected to log a
    /// [`Offer::Purged`] outcome as an overflow condition.
    pub fn offer(&self, frame: TelemetryFrame) -> Offer {
        match self.try_push(frame) {
            Ok(()) => Offer::Accepted,
            Err(QueueFull) => {
                self.purge();
                Offer::Purged
            }
        }
    }

    /// Blocking pop: suspends until a frame is available, oldest first
    pub async fn pop(&self) -> TelemetryFrame {
        self.inner.receive().await
    }

    /// Non-blocking pop
    pub fn try_pop(&self) -> Option<TelemetryFrame> {
        self.inner.try_receive().ok()
    }

    /// Atomically drop every queued frame
    pub fn purge(&self) {
        self.inner.clear();
    }

    /// Number of frames currently queued
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if no frames are queued
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Fixed capacity
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<M: RawMutex, const N: usize> Default for FrameQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    fn frame_with_eco2(eco2: u16) -> TelemetryFrame {
        let mut frame = TelemetryFrame::new();
        frame.eco2_ppm = eco2;
        frame
    }

    #[test]
    fn test_fifo_order() {
        let queue: FrameQueue<NoopRawMutex, 4> = FrameQueue::new();

        for i in 1..=4 {
            queue.try_push(frame_with_eco2(i)).unwrap();
        }

        for i in 1..=4 {
            let frame = block_on(queue.pop());
            assert_eq!(frame.eco2_ppm, i);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_full_is_rejected_not_blocking() {
        let queue: FrameQueue<NoopRawMutex, 2> = FrameQueue::new();

        queue.try_push(frame_with_eco2(1)).unwrap();
        queue.try_push(frame_with_eco2(2)).unwrap();
        assert_eq!(queue.try_push(frame_with_eco2(3)), Err(QueueFull));

        // Rejected push leaves the queue contents intact
        assert_eq!(queue.len(), 2);
        assert_eq!(block_on(queue.pop()).eco2_ppm, 1);
    }

    #[test]
    fn test_offer_purges_on_overflow() {
        let queue: FrameQueue<NoopRawMutex, 2> = FrameQueue::new();

        assert_eq!(queue.offer(frame_with_eco2(1)), Offer::Accepted);
        assert_eq!(queue.offer(frame_with_eco2(2)), Offer::Accepted);

        // Overflow: everything is dropped, including the offered frame
        assert_eq!(queue.offer(frame_with_eco2(3)), Offer::Purged);
        assert_eq!(queue.len(), 0);
        assert!(queue.try_pop().is_none());

        // Producer continues undeterred on the next cycle
        assert_eq!(queue.offer(frame_with_eco2(4)), Offer::Accepted);
        assert_eq!(block_on(queue.pop()).eco2_ppm, 4);
    }

    #[test]
    fn test_purge_empties() {
        let queue: FrameQueue<NoopRawMutex, 8> = FrameQueue::new();

        for i in 1..=5 {
            queue.try_push(frame_with_eco2(i)).unwrap();
        }
        queue.purge();
        assert_eq!(queue.len(), 0);
        assert!(queue.try_pop().is_none());
    }

    #[test]
    fn test_capacity_is_fixed() {
        let queue: FrameQueue<NoopRawMutex, 20> = FrameQueue::new();
        assert_eq!(queue.capacity(), 20);
        assert!(queue.is_empty());
    }
}
