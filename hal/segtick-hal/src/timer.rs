//! Periodic tick timer abstraction
//!
//! The bus engine is advanced by a timer interrupt firing every few
//! microseconds. The timer is configured once by the board crate; the
//! driver only arms and disarms it.

/// Periodic interrupt source
///
/// Both methods take `&self` because the timer is armed from producer
/// contexts and disarmed from inside its own interrupt handler. They must be
/// idempotent: starting a running timer or stopping a stopped one is a no-op.
pub trait TickTimer {
    /// Enable the periodic interrupt
    fn start(&self);

    /// Disable the periodic interrupt
    fn stop(&self);
}

impl<T: TickTimer + ?Sized> TickTimer for &T {
    fn start(&self) {
        T::start(self)
    }

    fn stop(&self) {
        T::stop(self)
    }
}
