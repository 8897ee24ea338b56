//! SysTick handler
//!
//! The transmitter lives in a blocking mutex so the handler can reach it;
//! nothing else locks it after [`install`].

use core::cell::RefCell;

use cortex_m_rt::exception;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use segtick_core::Transmitter;
use segtick_hal_rp2040::{OpenDrain, PushPull, SysTickTimer};

/// Transmitter type for this board
pub type BoardTransmitter = Transmitter<'static, PushPull<'static>, OpenDrain<'static>, SysTickTimer>;

static TRANSMITTER: Mutex<CriticalSectionRawMutex, RefCell<Option<BoardTransmitter>>> =
    Mutex::new(RefCell::new(None));

/// Hand the transmitter to the SysTick handler
pub fn install(transmitter: BoardTransmitter) {
    TRANSMITTER.lock(|cell| {
        cell.replace(Some(transmitter));
    });
}

#[exception]
fn SysTick() {
    TRANSMITTER.lock(|cell| {
        if let Some(tx) = cell.borrow_mut().as_mut() {
            tx.on_tick();
        }
    });
}
