//! Shared host-side fixtures: a bus-level wire decoder, pins that feed it,
//! and a tick timer that can be inspected from any thread.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use segtick_hal::{InputPin, OutputPin, TickTimer};

/// Decodes start/byte/ack/stop sequences from line transitions
#[derive(Debug)]
pub struct Wire {
    clk: bool,
    dio: bool,
    in_frame: bool,
    bits: u8,
    byte: u8,
    current: Vec<u8>,
    /// Completed frames, in wire order
    pub frames: Vec<Vec<u8>>,
    /// Start conditions seen
    pub starts: usize,
}

impl Default for Wire {
    fn default() -> Self {
        // Both lines idle high (pulled up)
        Self {
            clk: true,
            dio: true,
            in_frame: false,
            bits: 0,
            byte: 0,
            current: Vec::new(),
            frames: Vec::new(),
            starts: 0,
        }
    }
}

impl Wire {
    pub fn shared() -> Arc<Mutex<Wire>> {
        Arc::new(Mutex::new(Wire::default()))
    }

    fn set_clk(&mut self, high: bool) {
        let rising = high && !self.clk;
        self.clk = high;
        if !rising || !self.in_frame {
            return;
        }

        if self.bits < 8 {
            // Data latched on the rising edge, LSB first
            if self.dio {
                self.byte |= 1 << self.bits;
            }
            self.bits += 1;
        } else {
            // Ninth clock: acknowledgment pulse
            self.current.push(self.byte);
            self.bits = 0;
            self.byte = 0;
        }
    }

    fn set_dio(&mut self, high: bool) {
        let changed = high != self.dio;
        self.dio = high;
        if !changed || !self.clk {
            return;
        }

        if high {
            // Stop: a partial byte here is the stop sequence's own clock
            if self.in_frame {
                self.frames.push(std::mem::take(&mut self.current));
            }
            self.in_frame = false;
        } else {
            self.in_frame = true;
            self.starts += 1;
            self.current.clear();
        }
        self.bits = 0;
        self.byte = 0;
    }
}

/// Clock line attached to a [`Wire`]
pub struct WireClk(pub Arc<Mutex<Wire>>);

impl OutputPin for WireClk {
    fn set_high(&mut self) {
        self.0.lock().unwrap().set_clk(true);
    }

    fn set_low(&mut self) {
        self.0.lock().unwrap().set_clk(false);
    }
}

/// Data line attached to a [`Wire`]
pub struct WireDio {
    pub wire: Arc<Mutex<Wire>>,
    /// Whether the simulated device acknowledges bytes
    pub acks: bool,
}

impl OutputPin for WireDio {
    fn set_high(&mut self) {
        self.wire.lock().unwrap().set_dio(true);
    }

    fn set_low(&mut self) {
        self.wire.lock().unwrap().set_dio(false);
    }
}

impl InputPin for WireDio {
    fn is_high(&mut self) -> bool {
        !self.acks
    }
}

/// Pins for a device that acknowledges everything
pub fn wire_pins() -> (Arc<Mutex<Wire>>, WireClk, WireDio) {
    let wire = Wire::shared();
    let clk = WireClk(wire.clone());
    let dio = WireDio {
        wire: wire.clone(),
        acks: true,
    };
    (wire, clk, dio)
}

type Hook = Box<dyn FnMut() + Send>;

/// Tick timer visible across threads
///
/// An optional one-shot hook runs inside `stop`, which lets a test inject a
/// producer at the exact point where the tick handler is parking.
#[derive(Default)]
pub struct SharedTimer {
    running: AtomicBool,
    starts: AtomicU32,
    stops: AtomicU32,
    stop_hook: Mutex<Option<Hook>>,
}

impl SharedTimer {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn starts(&self) -> u32 {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> u32 {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn on_next_stop(&self, hook: impl FnMut() + Send + 'static) {
        *self.stop_hook.lock().unwrap() = Some(Box::new(hook));
    }
}

impl TickTimer for SharedTimer {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.running.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);

        let hook = self.stop_hook.lock().unwrap().take();
        if let Some(mut hook) = hook {
            hook();
        }
    }
}
