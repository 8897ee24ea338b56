//! Bus context and its two halves
//!
//! [`Bus`] owns the frame queue and the shared [`Link`]. Splitting it yields:
//! - [`Sender`]: `Copy` handle for any context that enqueues frames
//! - [`Transmitter`]: owns the lines and the state machine; its
//!   [`on_tick`](Transmitter::on_tick) is what the timer interrupt calls

use segtick_hal::{IoPin, OutputPin, TickTimer};
use segtick_protocol::Frame;

use crate::link::Link;
use crate::queue::{Consumer, FrameQueue, Producer, QueueFull, DEFAULT_QUEUE_SLOTS};
use crate::state::{Machine, Phase, Step};

/// Driver context: queue plus link state
///
/// Create it once with a `'static` lifetime (e.g. in a `StaticCell`) and
/// split it; there is no other way to reach the queue.
pub struct Bus<const N: usize = DEFAULT_QUEUE_SLOTS> {
    queue: FrameQueue<N>,
    link: Link,
}

impl<const N: usize> Default for Bus<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Bus<N> {
    /// Create an empty, parked bus
    pub const fn new() -> Self {
        Self {
            queue: FrameQueue::new(),
            link: Link::new(),
        }
    }

    /// Split into the producer handle and the tick-driven transmitter
    ///
    /// `clk` and `dio` are the bus lines; `timer` is the periodic interrupt
    /// whose handler must call [`Transmitter::on_tick`].
    pub fn split<'a, CLK, DIO, T>(
        &'a mut self,
        clk: CLK,
        dio: DIO,
        timer: &'a T,
    ) -> (Sender<'a, T, N>, Transmitter<'a, CLK, DIO, T, N>)
    where
        CLK: OutputPin,
        DIO: IoPin,
        T: TickTimer,
    {
        let Bus { queue, link } = self;
        let link: &'a Link = link;
        let (producer, consumer) = queue.split();

        let sender = Sender {
            producer,
            link,
            timer,
        };
        let transmitter = Transmitter {
            machine: Machine::new(),
            consumer,
            clk,
            dio,
            link,
            timer,
        };
        (sender, transmitter)
    }
}

/// Producer handle: enqueue frames and wake the transmitter
pub struct Sender<'a, T, const N: usize = DEFAULT_QUEUE_SLOTS> {
    producer: Producer<'a, N>,
    link: &'a Link,
    timer: &'a T,
}

impl<T, const N: usize> Clone for Sender<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Sender<'_, T, N> {}

impl<'a, T: TickTimer, const N: usize> Sender<'a, T, N> {
    /// Queue one frame for transmission
    pub fn send(&self, frame: Frame) -> Result<(), QueueFull> {
        self.send_all(&[frame])
    }

    /// Queue several frames as one unit, all or nothing
    pub fn send_all(&self, frames: &[Frame]) -> Result<(), QueueFull> {
        let result = self.producer.enqueue_all(frames);
        // Also on failure: a full queue means the transmitter must run
        self.link.wake(self.timer);
        result
    }

    /// Read and clear the acknowledgment status
    ///
    /// Returns `true` if every byte sent since the previous call was
    /// acknowledged by the device.
    pub fn take_ack_status(&self) -> bool {
        self.link.ack().take_all_acknowledged()
    }

    /// Check if the transmitter is parked (timer stopped, nothing queued)
    pub fn is_idle(&self) -> bool {
        !self.link.is_awake()
    }

    /// Frames waiting in the queue
    pub fn pending(&self) -> usize {
        self.producer.queue().len()
    }

    /// Room left in the queue
    pub fn free(&self) -> usize {
        self.producer.free()
    }

    /// Frames fully transmitted since start-up
    pub fn frames_sent(&self) -> u32 {
        self.link.frames_sent()
    }
}

/// Consumer side: owns the bus lines and the state machine
pub struct Transmitter<'a, CLK, DIO, T, const N: usize = DEFAULT_QUEUE_SLOTS> {
    machine: Machine,
    consumer: Consumer<'a, N>,
    clk: CLK,
    dio: DIO,
    link: &'a Link,
    timer: &'a T,
}

impl<'a, CLK, DIO, T, const N: usize> Transmitter<'a, CLK, DIO, T, N>
where
    CLK: OutputPin,
    DIO: IoPin,
    T: TickTimer,
{
    /// Advance the bus by one step
    ///
    /// Call from the tick timer's interrupt handler and nowhere else.
    pub fn on_tick(&mut self) {
        let step = self
            .machine
            .tick(&mut self.clk, &mut self.dio, &mut self.consumer);

        match step {
            Step::Busy => {}
            Step::Ack { acked } => self.link.ack().record(acked),
            Step::Complete => {
                self.link.frame_complete();
                if self.consumer.is_empty() {
                    self.park();
                }
            }
            // Woken without work (or by a restart that lost the race)
            Step::Starved => self.park(),
        }
    }

    fn park(&self) {
        let consumer = &self.consumer;
        self.link.park(self.timer, || !consumer.is_empty());
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Check if no frame is on the wire
    pub fn is_idle(&self) -> bool {
        self.machine.is_idle()
    }

    /// State machine, for inspection
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Give back the bus lines
    pub fn release(self) -> (CLK, DIO) {
        (self.clk, self.dio)
    }
}
