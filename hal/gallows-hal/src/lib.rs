//! Gallows Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits the display transport and the
//! button reader are written against. Board crates implement them on top of
//! their chip HAL, tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  gallows-display, gallows-core          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gallows-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ gallows-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! The traits are infallible. A bit-banged line has no way to notice a
//! failed write, so there is nothing to report.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{InputPin, Level, OutputPin};
