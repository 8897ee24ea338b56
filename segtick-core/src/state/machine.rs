//! Tick-driven TM1637 bus engine
//!
//! Each call to [`Machine::tick`] performs at most one hardware action
//! (a line write, a short fixed group of writes for one bit, or a line
//! sample). Timing comes entirely from how often `tick` is called; the
//! device needs roughly 5-10 µs between calls.

use segtick_hal::{IoPin, Level, OutputPin};
use segtick_protocol::Frame;

use super::phase::Phase;

/// Supplier of frames to transmit
///
/// Implemented by the queue's consumer half; `Option<Frame>` works as a
/// one-shot source.
pub trait FrameSource {
    /// Take the next frame, if any
    fn next_frame(&mut self) -> Option<Frame>;
}

impl FrameSource for Option<Frame> {
    fn next_frame(&mut self) -> Option<Frame> {
        self.take()
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Idle and nothing to send; no line was touched
    Starved,
    /// Work done, more ticks needed
    Busy,
    /// The acknowledgment bit of a byte was sampled
    Ack { acked: bool },
    /// Last tick of a frame; the machine is idle again
    Complete,
}

/// Bus engine state
#[derive(Debug, Clone)]
pub struct Machine {
    phase: Phase,
    sub_step: u8,
    /// Frame on the wire, copied out of the queue
    frame: Frame,
    /// Index of the byte being sent
    cursor: u8,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Create an idle machine
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            sub_step: 0,
            frame: Frame::byte(0),
            cursor: 0,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sub-step within the current phase
    pub fn sub_step(&self) -> u8 {
        self.sub_step
    }

    /// Check if the machine is waiting for a frame
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Frame currently (or last) transmitted
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Bytes of the current frame not yet fully sent, including the
    /// one on the wire
    pub fn remaining(&self) -> usize {
        if self.phase.is_transmitting() {
            self.frame.len() - self.cursor as usize
        } else {
            0
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.sub_step = 0;
    }

    fn current_byte(&self) -> u8 {
        self.frame.get(self.cursor as usize).unwrap_or(0)
    }

    /// Advance the bus by one step
    pub fn tick<CLK, DIO, S>(&mut self, clk: &mut CLK, dio: &mut DIO, source: &mut S) -> Step
    where
        CLK: OutputPin,
        DIO: IoPin,
        S: FrameSource + ?Sized,
    {
        match self.phase {
            Phase::Idle => match source.next_frame() {
                Some(frame) => {
                    self.frame = frame;
                    self.cursor = 0;
                    self.enter(Phase::Start);
                    Step::Busy
                }
                None => Step::Starved,
            },

            Phase::Start => {
                match self.sub_step {
                    0 => {
                        dio.set_high();
                        clk.set_high();
                        self.sub_step += 1;
                    }
                    1 => {
                        // Data falling while clock is high: start condition
                        dio.set_low();
                        self.sub_step += 1;
                    }
                    _ => {
                        clk.set_low();
                        self.enter(Phase::WriteBit);
                    }
                }
                Step::Busy
            }

            Phase::WriteBit => {
                match self.sub_step {
                    bit @ 0..=7 => {
                        let level = Level::from((self.current_byte() >> bit) & 1 == 1);
                        clk.set_low();
                        dio.set_level(level);
                        clk.set_high();
                        self.sub_step += 1;
                    }
                    8 => {
                        // Release data for the acknowledgment window
                        clk.set_low();
                        dio.set_high();
                        self.sub_step += 1;
                    }
                    _ => {
                        clk.set_high();
                        self.enter(Phase::ReadAck);
                    }
                }
                Step::Busy
            }

            Phase::ReadAck => {
                if self.sub_step == 0 {
                    // Device pulls data low to acknowledge
                    let acked = dio.is_low();
                    self.sub_step += 1;
                    Step::Ack { acked }
                } else {
                    clk.set_low();
                    if (self.cursor as usize) + 1 < self.frame.len() {
                        self.cursor += 1;
                        self.enter(Phase::WriteBit);
                    } else {
                        self.enter(Phase::Stop);
                    }
                    Step::Busy
                }
            }

            Phase::Stop => {
                match self.sub_step {
                    0 => clk.set_low(),
                    1 => dio.set_low(),
                    2 => clk.set_high(),
                    // Data rising while clock is high: stop condition
                    _ => dio.set_high(),
                }
                if self.sub_step >= 3 {
                    self.enter(Phase::Done);
                } else {
                    self.sub_step += 1;
                }
                Step::Busy
            }

            Phase::Done => {
                self.enter(Phase::Idle);
                Step::Complete
            }
        }
    }
}
