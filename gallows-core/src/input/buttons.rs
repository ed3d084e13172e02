//! Debounced button reader
//!
//! A press is accepted only when two samples taken a settle delay apart
//! both read as pressed. Holding a button keeps producing one event per
//! poll cycle.

use embedded_hal::delay::DelayNs;
use gallows_hal::InputPin;

use super::{Button, DEFAULT_SETTLE_MS};

/// The four direction buttons, wired active-low with pull-ups
pub struct Buttons<P> {
    up: P,
    down: P,
    left: P,
    right: P,
    settle_ms: u32,
}

impl<P: InputPin> Buttons<P> {
    /// Create a reader with the default settle delay
    pub fn new(up: P, down: P, left: P, right: P) -> Self {
        Self::with_settle_ms(up, down, left, right, DEFAULT_SETTLE_MS)
    }

    /// Create a reader with a specific settle delay
    pub fn with_settle_ms(up: P, down: P, left: P, right: P, settle_ms: u32) -> Self {
        Self {
            up,
            down,
            left,
            right,
            settle_ms,
        }
    }

    /// Current settle delay
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    fn pin(&self, button: Button) -> &P {
        match button {
            Button::Up => &self.up,
            Button::Down => &self.down,
            Button::Left => &self.left,
            Button::Right => &self.right,
        }
    }

    /// Instantaneous, undebounced state of one button
    ///
    /// The line reads low while the button is held.
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pin(button).is_low()
    }

    /// Run one debounce cycle
    ///
    /// Picks the highest-priority button that currently reads pressed,
    /// waits the settle delay and samples it again. Returns the button only
    /// if the second sample agrees. Blocks for the settle delay whenever any
    /// button reads pressed, and not at all otherwise.
    pub fn poll<D: DelayNs>(&mut self, delay: &mut D) -> Option<Button> {
        let candidate = Button::PRIORITY
            .into_iter()
            .find(|button| self.is_pressed(*button))?;

        delay.delay_ms(self.settle_ms);

        if self.is_pressed(candidate) {
            Some(candidate)
        } else {
            None
        }
    }
}
