//! Transmission phases

/// Where the machine is within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for a frame
    #[default]
    Idle,
    /// Emitting the start condition (3 sub-steps)
    Start,
    /// Clocking out one byte, then releasing data (10 sub-steps)
    WriteBit,
    /// Sampling the acknowledgment and closing its clock pulse (2 sub-steps)
    ReadAck,
    /// Emitting the stop condition (4 sub-steps)
    Stop,
    /// Frame finished, returning to idle
    Done,
}

impl Phase {
    /// Number of ticks spent in this phase
    ///
    /// `WriteBit` and `ReadAck` repeat once per byte of the frame.
    pub const fn sub_steps(self) -> u8 {
        match self {
            Phase::Idle | Phase::Done => 1,
            Phase::Start => 3,
            Phase::WriteBit => 10,
            Phase::ReadAck => 2,
            Phase::Stop => 4,
        }
    }

    /// Check if a frame is on the wire
    pub const fn is_transmitting(self) -> bool {
        !matches!(self, Phase::Idle | Phase::Done)
    }

    /// Ticks needed to send a frame of `len` bytes, from `Idle` back to `Idle`
    pub const fn ticks_per_frame(len: usize) -> usize {
        let per_byte = Phase::WriteBit.sub_steps() as usize + Phase::ReadAck.sub_steps() as usize;
        Phase::Idle.sub_steps() as usize
            + Phase::Start.sub_steps() as usize
            + len * per_byte
            + Phase::Stop.sub_steps() as usize
            + Phase::Done.sub_steps() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmitting_phases() {
        assert!(!Phase::Idle.is_transmitting());
        assert!(Phase::Start.is_transmitting());
        assert!(Phase::WriteBit.is_transmitting());
        assert!(Phase::ReadAck.is_transmitting());
        assert!(Phase::Stop.is_transmitting());
        assert!(!Phase::Done.is_transmitting());
    }

    #[test]
    fn test_ticks_per_frame() {
        // idle + start + (write + ack) + stop + done
        assert_eq!(Phase::ticks_per_frame(1), 1 + 3 + 12 + 4 + 1);
        assert_eq!(Phase::ticks_per_frame(3), 1 + 3 + 36 + 4 + 1);
    }
}
