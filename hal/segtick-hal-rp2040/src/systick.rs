//! SysTick as the bus tick timer
//!
//! The timer is configured once with a reload value; `start` and `stop`
//! only flip the enable and interrupt bits so they are safe to call from
//! both thread mode and the SysTick handler.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use segtick_hal::TickTimer;

/// SysTick reload register width
pub const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// CSR bits
const CSR_ENABLE: u32 = 1 << 0;
const CSR_TICKINT: u32 = 1 << 1;

/// Tick timer configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Interval shorter than one core clock cycle
    IntervalTooShort,
    /// Interval does not fit the 24-bit reload register
    IntervalTooLong,
}

/// Reload value for a tick every `interval_us` at `core_clock_hz`
pub const fn reload_for(core_clock_hz: u32, interval_us: u32) -> Result<u32, TimerError> {
    let cycles = (core_clock_hz as u64 * interval_us as u64) / 1_000_000;
    if cycles < 2 {
        return Err(TimerError::IntervalTooShort);
    }
    if cycles - 1 > MAX_RELOAD as u64 {
        return Err(TimerError::IntervalTooLong);
    }
    Ok((cycles - 1) as u32)
}

/// SysTick-driven tick timer
///
/// Consumes the `SYST` peripheral token so nothing else reconfigures the
/// counter. The application must route the SysTick exception to the bus
/// transmitter.
pub struct SysTickTimer {
    reload: u32,
}

impl SysTickTimer {
    /// Configure SysTick for a tick every `interval_us`, initially stopped
    pub fn new(mut syst: SYST, core_clock_hz: u32, interval_us: u32) -> Result<Self, TimerError> {
        let reload = reload_for(core_clock_hz, interval_us)?;

        syst.disable_interrupt();
        syst.disable_counter();
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(reload);
        syst.clear_current();

        Ok(Self { reload })
    }

    /// Programmed reload value
    pub fn reload(&self) -> u32 {
        self.reload
    }

    /// Check if the counter is enabled
    pub fn is_running(&self) -> bool {
        // SAFETY: read-only register access
        let csr = unsafe { (*SYST::PTR).csr.read() };
        csr & CSR_ENABLE != 0
    }
}

impl TickTimer for SysTickTimer {
    fn start(&self) {
        critical_section::with(|_| {
            // SAFETY: SYST was handed over in `new`; the critical section
            // makes the read-modify-write atomic against the SysTick handler
            unsafe {
                let syst = &*SYST::PTR;
                syst.cvr.write(0);
                syst.csr.modify(|csr| csr | CSR_ENABLE | CSR_TICKINT);
            }
        });
    }

    fn stop(&self) {
        critical_section::with(|_| {
            // SAFETY: as in `start`
            unsafe {
                (*SYST::PTR)
                    .csr
                    .modify(|csr| csr & !(CSR_ENABLE | CSR_TICKINT));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_for() {
        // 125 MHz, 10 µs
        assert_eq!(reload_for(125_000_000, 10), Ok(1249));
        assert_eq!(reload_for(1_000_000, 1), Err(TimerError::IntervalTooShort));
        assert_eq!(reload_for(125_000_000, 1_000_000), Err(TimerError::IntervalTooLong));
    }
}
