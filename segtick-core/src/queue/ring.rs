//! Lock-free frame ring
//!
//! Fixed-capacity circular buffer with one slot sacrificed to tell full from
//! empty: the queue is empty when `head == tail` and full when
//! `(head + 1) % N == tail`, so at most `N - 1` frames are queued.
//!
//! Index ownership:
//! - `head` is written only by producers, after the slot contents
//! - `tail` is written only by the consumer, after the slot has been read
//!
//! Slots are stored as atomic bytes so neither side can observe a torn
//! frame. Producers serialize among themselves with a short critical section
//! around the reservation; the consumer never takes it.

use portable_atomic::{AtomicU8, AtomicUsize, Ordering};
use segtick_protocol::frame::{Frame, FRAME_SLOT_LEN};

use crate::state::FrameSource;

/// Default number of slots (49 usable)
pub const DEFAULT_QUEUE_SLOTS: usize = 50;

/// The queue had no room for the frame(s); nothing was enqueued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// One frame worth of storage
struct Slot {
    raw: [AtomicU8; FRAME_SLOT_LEN],
}

impl Slot {
    #[allow(clippy::declare_interior_mutable_const)]
    const EMPTY: Slot = {
        const ZERO: AtomicU8 = AtomicU8::new(0);
        Slot {
            raw: [ZERO; FRAME_SLOT_LEN],
        }
    };

    fn write(&self, frame: &Frame) {
        for (cell, byte) in self.raw.iter().zip(frame.to_raw()) {
            cell.store(byte, Ordering::Relaxed);
        }
    }

    fn read(&self) -> [u8; FRAME_SLOT_LEN] {
        let mut raw = [0u8; FRAME_SLOT_LEN];
        for (byte, cell) in raw.iter_mut().zip(self.raw.iter()) {
            *byte = cell.load(Ordering::Relaxed);
        }
        raw
    }
}

/// Bounded frame ring with `N` slots
pub struct FrameQueue<const N: usize = DEFAULT_QUEUE_SLOTS> {
    slots: [Slot; N],
    /// Next slot to write
    head: AtomicUsize,
    /// Next slot to read
    tail: AtomicUsize,
}

impl<const N: usize> Default for FrameQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameQueue<N> {
    /// Create an empty queue
    ///
    /// `N` must be at least 2 (one slot is always kept free).
    pub const fn new() -> Self {
        assert!(N >= 2, "frame queue needs at least two slots");
        Self {
            slots: [Slot::EMPTY; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    /// Split into the producer and consumer halves
    ///
    /// The producer is `Copy` and may be handed to every context that
    /// enqueues. There is exactly one consumer.
    pub fn split(&mut self) -> (Producer<'_, N>, Consumer<'_, N>) {
        let queue: &FrameQueue<N> = self;
        (Producer { queue }, Consumer { queue })
    }

    /// Maximum number of frames that can be queued at once
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Number of frames currently queued
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        occupied::<N>(head, tail)
    }

    /// Check if no frame is queued
    ///
    /// Sequentially consistent so it can be ordered against the wake flag
    /// when the transmitter decides whether to park.
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::SeqCst) == self.tail.load(Ordering::SeqCst)
    }

    /// Check if no further frame fits
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Frames between `tail` and `head`
const fn occupied<const N: usize>(head: usize, tail: usize) -> usize {
    (head + N - tail) % N
}

/// Producer half of a [`FrameQueue`]
pub struct Producer<'a, const N: usize> {
    queue: &'a FrameQueue<N>,
}

impl<const N: usize> Clone for Producer<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize> Copy for Producer<'_, N> {}

impl<'a, const N: usize> Producer<'a, N> {
    /// Copy a frame into the queue
    ///
    /// Returns [`QueueFull`] without touching the queue if there is no room.
    pub fn enqueue(&self, frame: &Frame) -> Result<(), QueueFull> {
        self.enqueue_all(core::slice::from_ref(frame))
    }

    /// Copy a batch of frames into the queue, all or nothing
    ///
    /// The batch becomes visible to the consumer with a single `head` update,
    /// so it is never observed half-written and never interleaved with
    /// another producer's frames.
    pub fn enqueue_all(&self, frames: &[Frame]) -> Result<(), QueueFull> {
        let queue = self.queue;

        critical_section::with(|_| {
            // Only producers write head, and we hold the producer lock
            let head = queue.head.load(Ordering::Relaxed);
            let tail = queue.tail.load(Ordering::Acquire);
            let free = N - 1 - occupied::<N>(head, tail);

            if frames.len() > free {
                return Err(QueueFull);
            }

            let mut next = head;
            for frame in frames {
                queue.slots[next].write(frame);
                next = (next + 1) % N;
            }

            queue.head.store(next, Ordering::SeqCst);
            Ok(())
        })
    }

    /// Number of frames that can still be enqueued
    pub fn free(&self) -> usize {
        self.queue.capacity() - self.queue.len()
    }

    /// The underlying queue
    pub fn queue(&self) -> &'a FrameQueue<N> {
        self.queue
    }
}

/// Consumer half of a [`FrameQueue`]
pub struct Consumer<'a, const N: usize> {
    queue: &'a FrameQueue<N>,
}

impl<'a, const N: usize> Consumer<'a, N> {
    /// Copy the oldest frame out of the queue
    ///
    /// Returns `None` without touching the queue if it is empty.
    pub fn dequeue(&mut self) -> Option<Frame> {
        let queue = self.queue;

        // Only the consumer writes tail
        let tail = queue.tail.load(Ordering::Relaxed);
        let head = queue.head.load(Ordering::Acquire);
        if head == tail {
            return None;
        }

        let raw = queue.slots[tail].read();
        queue.tail.store((tail + 1) % N, Ordering::Release);

        // Producers only ever store valid frames
        Frame::from_raw(raw).ok()
    }

    /// Check if no frame is queued
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of frames currently queued
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// The underlying queue
    pub fn queue(&self) -> &'a FrameQueue<N> {
        self.queue
    }
}

impl<const N: usize> FrameSource for Consumer<'_, N> {
    fn next_frame(&mut self) -> Option<Frame> {
        self.dequeue()
    }
}
