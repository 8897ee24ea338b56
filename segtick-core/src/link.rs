//! Shared state between producers and the tick handler
//!
//! Two things cross the producer/interrupt boundary besides the queue:
//! whether the tick timer is armed, and how many acknowledgments the
//! device has missed. Both are single atomics.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use segtick_hal::TickTimer;

/// Sticky count of missed acknowledgments
///
/// Written only by the tick handler; read-and-cleared by the application.
#[derive(Debug, Default)]
pub struct AckTracker {
    misses: AtomicU32,
}

impl AckTracker {
    /// Create a clean tracker
    pub const fn new() -> Self {
        Self {
            misses: AtomicU32::new(0),
        }
    }

    /// Record one sampled acknowledgment bit
    pub fn record(&self, acked: bool) {
        if !acked {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Missed acknowledgments since the last [`take`](Self::take)
    pub fn misses(&self) -> u32 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Read and reset the miss count in one atomic step
    pub fn take(&self) -> u32 {
        self.misses.swap(0, Ordering::AcqRel)
    }

    /// Read and reset; `true` if every byte since the last check was acked
    pub fn take_all_acknowledged(&self) -> bool {
        self.take() == 0
    }
}

/// Timer arbitration and bus statistics
///
/// `awake` is the single source of truth for who owns the tick timer. A
/// producer that flips it from `false` to `true` starts the timer; the tick
/// handler clears it when it runs out of work and re-checks the queue
/// afterwards, so a frame enqueued while the handler is parking is never
/// stranded.
#[derive(Debug, Default)]
pub struct Link {
    awake: AtomicBool,
    ack: AckTracker,
    frames_sent: AtomicU32,
}

impl Link {
    /// Create a parked link
    pub const fn new() -> Self {
        Self {
            awake: AtomicBool::new(false),
            ack: AckTracker::new(),
            frames_sent: AtomicU32::new(0),
        }
    }

    /// Check if the tick timer is (about to be) running
    pub fn is_awake(&self) -> bool {
        self.awake.load(Ordering::SeqCst)
    }

    /// Acknowledgment tracker
    pub fn ack(&self) -> &AckTracker {
        &self.ack
    }

    /// Frames fully transmitted since start-up
    pub fn frames_sent(&self) -> u32 {
        self.frames_sent.load(Ordering::Relaxed)
    }

    pub(crate) fn frame_complete(&self) {
        self.frames_sent.fetch_add(1, Ordering::Relaxed);
    }

    /// Producer side: make sure the timer is running
    ///
    /// Call after enqueueing. Returns `true` if this call started the timer.
    pub fn wake<T: TickTimer + ?Sized>(&self, timer: &T) -> bool {
        if self.awake.swap(true, Ordering::SeqCst) {
            return false;
        }
        timer.start();
        true
    }

    /// Tick side: stop the timer unless work arrived meanwhile
    ///
    /// `pending` reports whether the queue holds frames; it is evaluated
    /// after the timer is stopped and the flag cleared. Returns `true` if
    /// the timer was left stopped.
    pub fn park<T, F>(&self, timer: &T, pending: F) -> bool
    where
        T: TickTimer + ?Sized,
        F: FnOnce() -> bool,
    {
        timer.stop();
        self.awake.store(false, Ordering::SeqCst);

        if !pending() {
            return true;
        }

        // A producer enqueued while we were parking. Whoever flips the flag
        // back owns the restart.
        if !self.awake.swap(true, Ordering::SeqCst) {
            timer.start();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Mock timer counting start/stop calls
    #[derive(Default)]
    struct MockTimer {
        running: Cell<bool>,
        starts: Cell<u32>,
        stops: Cell<u32>,
    }

    impl TickTimer for MockTimer {
        fn start(&self) {
            self.running.set(true);
            self.starts.set(self.starts.get() + 1);
        }

        fn stop(&self) {
            self.running.set(false);
            self.stops.set(self.stops.get() + 1);
        }
    }

    #[test]
    fn test_ack_tracker_sticky() {
        let ack = AckTracker::new();
        ack.record(true);
        ack.record(false);
        ack.record(true);

        assert_eq!(ack.misses(), 1);
        assert!(!ack.take_all_acknowledged());
        // Cleared by the read
        assert!(ack.take_all_acknowledged());
    }

    #[test]
    fn test_wake_starts_timer_once() {
        let link = Link::new();
        let timer = MockTimer::default();

        assert!(link.wake(&timer));
        assert!(!link.wake(&timer));
        assert!(link.is_awake());
        assert!(timer.running.get());
        assert_eq!(timer.starts.get(), 1);
    }

    #[test]
    fn test_park_with_empty_queue_stops_timer() {
        let link = Link::new();
        let timer = MockTimer::default();
        link.wake(&timer);

        assert!(link.park(&timer, || false));
        assert!(!link.is_awake());
        assert!(!timer.running.get());

        // Next producer restarts it
        assert!(link.wake(&timer));
        assert!(timer.running.get());
    }

    #[test]
    fn test_park_with_pending_work_restarts_timer() {
        let link = Link::new();
        let timer = MockTimer::default();
        link.wake(&timer);

        assert!(!link.park(&timer, || true));
        assert!(link.is_awake());
        assert!(timer.running.get());
        assert_eq!(timer.starts.get(), 2);
    }

    #[test]
    fn test_park_race_producer_wins_restart() {
        let link = Link::new();
        let timer = MockTimer::default();
        link.wake(&timer);

        // Producer enqueues and wakes between the flag clear and the
        // pending check; it owns the restart, parking does not start twice
        let parked = link.park(&timer, || {
            assert!(link.wake(&timer));
            true
        });

        assert!(!parked);
        assert!(timer.running.get());
        assert_eq!(timer.starts.get(), 2);
    }
}
