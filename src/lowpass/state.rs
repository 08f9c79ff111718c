//! Fixed-point state of a single-pole low-pass filter.
//!
//! The filter is the Euler discretization of `dY/dt = (X - Y) / Tau`. The
//! accumulator holds the output scaled up by [`RESOLUTION`], the visible
//! output is its rounded, descaled copy. Only integer multiply, add,
//! subtract and one shift are needed per sample.

use super::coefficient::Coefficient;
use crate::error::Error;

/// Number of fractional bits kept by the accumulator.
pub const RESOLUTION_BITS: u32 = 10;

/// Scale between the accumulator and the output.
pub const RESOLUTION: u32 = 1 << RESOLUTION_BITS;

/// Largest sample the accumulator width is sized for.
pub const MAX_SAMPLE: u16 = (1 << 10) - 1;

// Half-up rounding bias.
const ROUNDING_BIAS: u32 = RESOLUTION / 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterState {
    accumulator: u32,
    output: u16,
}

impl FilterState {
    /// Settle the filter on `seed`.
    ///
    /// Feeding the same value to [`FilterState::update`] right after produces
    /// no transient.
    pub const fn new(seed: u16) -> Self {
        Self {
            accumulator: seed as u32 * RESOLUTION,
            output: seed,
        }
    }

    /// Same as [`FilterState::new`], but refuses seeds above [`MAX_SAMPLE`].
    pub fn try_new(seed: u16) -> Result<Self, Error> {
        check_range(seed)?;
        Ok(Self::new(seed))
    }

    pub fn reset(&mut self, seed: u16) {
        *self = Self::new(seed);
    }

    /// Advance the filter by one sample and return the new output.
    ///
    /// Must be called every sampling period the coefficient was derived for.
    ///
    /// # Wraparound
    ///
    /// Nothing is checked here. Inputs above [`MAX_SAMPLE`] may wrap the
    /// accumulator around and yield a garbage output. Use
    /// [`FilterState::try_update`] where the input is not trusted.
    #[inline]
    pub fn update(&mut self, input: u16, coefficient: Coefficient) -> u16 {
        let coefficient = u32::from(coefficient.value());

        // Split on the sign of the difference so the accumulator stays unsigned.
        if input > self.output {
            let step = coefficient * u32::from(input - self.output);
            self.accumulator = self.accumulator.wrapping_add(step);
        } else {
            let step = coefficient * u32::from(self.output - input);
            self.accumulator = self.accumulator.wrapping_sub(step);
        }

        self.output = descale(self.accumulator);
        self.output
    }

    /// Same as [`FilterState::update`], but refuses inputs above
    /// [`MAX_SAMPLE`]. The state is left untouched on error.
    pub fn try_update(&mut self, input: u16, coefficient: Coefficient) -> Result<u16, Error> {
        check_range(input)?;
        Ok(self.update(input, coefficient))
    }

    pub fn output(&self) -> u16 {
        self.output
    }

    pub fn accumulator(&self) -> u32 {
        self.accumulator
    }
}

#[inline]
fn descale(accumulator: u32) -> u16 {
    (accumulator.wrapping_add(ROUNDING_BIAS) >> RESOLUTION_BITS) as u16
}

fn check_range(sample: u16) -> Result<(), Error> {
    if sample > MAX_SAMPLE {
        return Err(Error::SampleOutOfRange(sample));
    }
    Ok(())
}
