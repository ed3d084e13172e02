//! GPIO adapters
//!
//! `embassy-rp` pins cannot fail, so these forward straight through.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output driven through [`gallows_hal::OutputPin`]
pub struct OutputLine<'d>(Output<'d>);

impl<'d> OutputLine<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl gallows_hal::OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Input read through [`gallows_hal::InputPin`]
pub struct InputLine<'d>(Input<'d>);

impl<'d> InputLine<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl gallows_hal::InputPin for InputLine<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
