//! Wire-level PCD8544 model for tests
//!
//! Probe pins feed every line transition into a model controller that
//! shifts bits in on the rising clock edge, splits bytes by the D/C level,
//! and keeps its own 504 bytes of display RAM. Tests can then read back what
//! the real panel would show.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use gallows_hal::OutputPin;

use crate::pcd8544::{Cursor, InitParams, Pcd8544, RAM_SIZE, ROWS, WIDTH};
use crate::transport::BitBang;

/// A byte as the controller received it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Written {
    Command(u8),
    Data(u8),
}

#[derive(Debug, Clone, Copy)]
enum Line {
    Sck,
    Din,
    Dc,
    Rst,
}

struct Device {
    sck: bool,
    din: bool,
    dc: bool,
    rst: bool,
    shift: u8,
    bits: u8,
    written: Vec<Written>,
    ram: [u8; RAM_SIZE],
    x: u8,
    y: u8,
    extended: bool,
    now_ns: u64,
    reset_since_ns: Option<u64>,
    reset_low_ns: u64,
}

impl Device {
    fn new() -> Self {
        Self {
            sck: false,
            din: false,
            dc: false,
            rst: true,
            shift: 0,
            bits: 0,
            written: Vec::new(),
            ram: [0xEE; RAM_SIZE],
            x: 0,
            y: 0,
            extended: false,
            now_ns: 0,
            reset_since_ns: None,
            reset_low_ns: 0,
        }
    }

    fn drive(&mut self, line: Line, high: bool) {
        match line {
            Line::Sck => {
                let rising = high && !self.sck;
                self.sck = high;
                if rising && self.rst {
                    self.clock_in();
                }
            }
            Line::Din => self.din = high,
            Line::Dc => self.dc = high,
            Line::Rst => {
                if !high && self.rst {
                    self.reset_since_ns = Some(self.now_ns);
                    self.x = 0;
                    self.y = 0;
                    self.extended = false;
                    self.bits = 0;
                } else if high && !self.rst {
                    if let Some(since) = self.reset_since_ns.take() {
                        self.reset_low_ns = self.now_ns - since;
                    }
                }
                self.rst = high;
            }
        }
    }

    fn clock_in(&mut self) {
        self.shift = (self.shift << 1) | self.din as u8;
        self.bits += 1;
        if self.bits < 8 {
            return;
        }
        self.bits = 0;
        let byte = self.shift;
        if self.dc {
            self.written.push(Written::Data(byte));
            self.data(byte);
        } else {
            self.written.push(Written::Command(byte));
            self.command(byte);
        }
    }

    fn command(&mut self, byte: u8) {
        if byte & 0xF8 == 0x20 {
            self.extended = byte & 0x01 != 0;
        } else if !self.extended {
            if byte & 0x80 != 0 {
                self.x = byte & 0x7F;
                if self.x >= WIDTH {
                    self.x = 0;
                }
            } else if byte & 0x40 != 0 {
                self.y = byte & 0x07;
                if self.y >= ROWS {
                    self.y = 0;
                }
            }
        }
    }

    fn data(&mut self, byte: u8) {
        self.ram[self.y as usize * WIDTH as usize + self.x as usize] = byte;
        self.x += 1;
        if self.x >= WIDTH {
            self.x = 0;
            self.y += 1;
            if self.y >= ROWS {
                self.y = 0;
            }
        }
    }
}

/// Output pin wired into the model
pub struct ProbePin {
    line: Line,
    device: Rc<RefCell<Device>>,
}

impl OutputPin for ProbePin {
    fn set_high(&mut self) {
        self.device.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.device.borrow_mut().drive(self.line, false);
    }
}

/// Delay that advances the model's clock instead of sleeping
pub struct ProbeDelay {
    device: Rc<RefCell<Device>>,
}

impl DelayNs for ProbeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.device.borrow_mut().now_ns += ns as u64;
    }
}

pub type ProbeDisplay = Pcd8544<BitBang<ProbePin, ProbePin>, ProbePin, ProbePin>;

/// Handle for inspecting the model after driving it
pub struct Probe {
    device: Rc<RefCell<Device>>,
}

impl Probe {
    /// A driver wired to a fresh model, not yet initialized
    pub fn display() -> (ProbeDisplay, Probe) {
        let device = Rc::new(RefCell::new(Device::new()));
        let pin = |line| ProbePin {
            line,
            device: device.clone(),
        };
        let bus = BitBang::new(pin(Line::Sck), pin(Line::Din));
        let display = Pcd8544::new(bus, pin(Line::Dc), pin(Line::Rst));
        (display, Probe { device })
    }

    /// A driver that has been through `initialize`, with the log cleared
    pub fn ready_display() -> (ProbeDisplay, Probe) {
        let (mut display, probe) = Self::display();
        let mut delay = probe.delay();
        display.initialize(&mut delay, &InitParams::default());
        probe.take_written();
        (display, probe)
    }

    pub fn delay(&self) -> ProbeDelay {
        ProbeDelay {
            device: self.device.clone(),
        }
    }

    pub fn written(&self) -> Vec<Written> {
        self.device.borrow().written.clone()
    }

    pub fn take_written(&self) -> Vec<Written> {
        core::mem::take(&mut self.device.borrow_mut().written)
    }

    /// Only the data bytes, in order
    pub fn data(&self) -> Vec<u8> {
        self.device
            .borrow()
            .written
            .iter()
            .filter_map(|w| match w {
                Written::Data(b) => Some(*b),
                Written::Command(_) => None,
            })
            .collect()
    }

    pub fn ram(&self) -> [u8; RAM_SIZE] {
        self.device.borrow().ram
    }

    pub fn ram_at(&self, row: u8, col: u8) -> u8 {
        self.device.borrow().ram[row as usize * WIDTH as usize + col as usize]
    }

    pub fn device_cursor(&self) -> Cursor {
        let device = self.device.borrow();
        Cursor {
            row: device.y,
            col: device.x,
        }
    }

    pub fn reset_released(&self) -> bool {
        self.device.borrow().rst
    }

    pub fn reset_low_ms(&self) -> u32 {
        (self.device.borrow().reset_low_ns / 1_000_000) as u32
    }
}
