//! First-order IIR low-pass filter for 10-bit sensor data.
//!
//! All run-time arithmetic is integer. The only floating point math is the
//! derivation of the filter coefficient from the sampling period and the
//! time constant, which can be evaluated at compile time:
//!
//! ```
//! use digital_lowpass::{Channel, Coefficient};
//!
//! // Ts = 1 ms, Tau = 15 ms.
//! const COEFFICIENT: Coefficient = Coefficient::from_time_constants(0.001, 0.015);
//!
//! let mut channel = Channel::new(0, COEFFICIENT);
//! // Call every Ts with a fresh sample.
//! let filtered = channel.tick(512);
//! assert!(filtered < 512);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod lowpass;

pub use error::Error;
pub use lowpass::{
    Channel, Coefficient, Config, FilterBank, FilterState, MAX_SAMPLE, RESOLUTION,
    RESOLUTION_BITS,
};
