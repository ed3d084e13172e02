//! Bit-banged serial transport
//!
//! Shifts bytes out MSB first on a data line, pulsing a clock line once per
//! bit. There is no hardware serial peripheral involved and no inter-bit
//! delay beyond instruction timing.

use gallows_hal::{Level, OutputPin};

/// Byte sink for the display protocol
///
/// Transmission is fire-and-forget: the receiver has no acknowledgment
/// channel, so there is no error to return.
pub trait SerialWrite {
    /// Shift one byte out, blocking until all eight bits are sent
    fn transmit(&mut self, byte: u8);
}

/// Software serial master on two GPIO lines
pub struct BitBang<SCK, DIN> {
    sck: SCK,
    din: DIN,
}

impl<SCK: OutputPin, DIN: OutputPin> BitBang<SCK, DIN> {
    /// Take ownership of the clock and data lines and park both low
    pub fn new(mut sck: SCK, mut din: DIN) -> Self {
        sck.set_low();
        din.set_low();
        Self { sck, din }
    }
}

impl<SCK: OutputPin, DIN: OutputPin> SerialWrite for BitBang<SCK, DIN> {
    fn transmit(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.din.set_level(Level::from(byte & (1 << bit) != 0));
            self.sck.set_high();
            self.sck.set_low();
        }
    }
}

impl<T: SerialWrite + ?Sized> SerialWrite for &mut T {
    fn transmit(&mut self, byte: u8) {
        T::transmit(self, byte)
    }
}
