//! Segtick - TM1637 counter demo
//!
//! Drives a 4-digit TM1637 module from an RP2040: clock on GPIO2, data on
//! GPIO3. A counter task updates the display once per second while SysTick
//! clocks the frames out in the background.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use segtick_core::Bus;
use segtick_drivers::Tm1637;
use segtick_hal_rp2040::{OpenDrain, PushPull, SysTickTimer};

mod config;
mod tasks;
mod tick;

// Bus context and tick timer (must live forever for the SysTick handler)
static BUS: StaticCell<Bus> = StaticCell::new();
static TIMER: StaticCell<SysTickTimer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Segtick firmware starting...");

    let p = embassy_rp::init(Default::default());
    let core = unwrap!(cortex_m::Peripherals::take());
    info!("Peripherals initialized");

    let config = config::load();

    let clock_hz = embassy_rp::clocks::clk_sys_freq();
    let timer: &'static SysTickTimer =
        TIMER.init(unwrap!(SysTickTimer::new(core.SYST, clock_hz, config.tick_interval_us)));
    info!(
        "SysTick: {} us per tick, reload {}",
        config.tick_interval_us,
        timer.reload()
    );

    let clk = PushPull::new(p.PIN_2);
    let dio = OpenDrain::new(p.PIN_3);

    let bus = BUS.init(Bus::new());
    let (sender, transmitter) = bus.split(clk, dio, timer);
    tick::install(transmitter);

    let mut display = Tm1637::from_config(sender, &config);
    if let Err(e) = display.init(config.digit_count) {
        warn!("Display init not queued: {:?}", e);
    }

    spawner
        .spawn(tasks::counter_task(display, config.digit_count))
        .unwrap();

    info!("Segtick running");
}
