//! Application tasks

use defmt::*;
use embassy_time::{Duration, Ticker};

use segtick_drivers::Tm1637;
use segtick_hal_rp2040::SysTickTimer;

/// Counter update interval in milliseconds
pub const COUNTER_INTERVAL_MS: u64 = 1000;

/// Count up on the display and report missing acknowledgments
#[embassy_executor::task]
pub async fn counter_task(display: Tm1637<'static, SysTickTimer>, digits: u8) {
    info!("Counter task started");

    let wrap = 10u32.pow(digits.min(9) as u32);
    let mut ticker = Ticker::every(Duration::from_millis(COUNTER_INTERVAL_MS));
    let mut count: u32 = 0;

    loop {
        if let Err(e) = display.show_number(count, digits) {
            warn!("Frame dropped: {:?}", e);
        }

        ticker.next().await;

        if !display.take_ack_status() {
            warn!("TM1637 did not acknowledge every byte");
        }

        count = (count + 1) % wrap;
    }
}
