use segtick_core::QueueFull;
use segtick_protocol::FrameError;

/// Driver errors
///
/// Both are reported before anything is queued, so a failed call never
/// leaves half a transaction behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1637Error {
    /// Not enough room in the frame queue
    QueueFull,
    /// More segment bytes than display registers
    FrameTooLong,
    /// Start position past the last register, or nothing to show
    InvalidPosition,
}

impl From<QueueFull> for Tm1637Error {
    fn from(_: QueueFull) -> Self {
        Tm1637Error::QueueFull
    }
}

impl From<FrameError> for Tm1637Error {
    fn from(_: FrameError) -> Self {
        Tm1637Error::FrameTooLong
    }
}
