use super::state::RESOLUTION;
use crate::error::Error;

/// Discretized filter gain `Ts / (Ts + Tau)`, scaled by [`RESOLUTION`].
///
/// With the resolution of 1024, the largest representable gain is
/// 255/1024, so every coefficient yields a stable filter. Zero is
/// representable too but freezes the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coefficient(u8);

impl Coefficient {
    pub const MAX: Self = Self(u8::MAX);

    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Derive the coefficient from the sampling period `Ts` and the time
    /// constant `Tau`, both in the same unit.
    ///
    /// Meant for `const` items, so the floating point math is folded away
    /// at compile time. Results outside of the `u8` range saturate. Use
    /// [`Coefficient::try_from_time_constants`] to have them rejected instead.
    pub const fn from_time_constants(sampling_period: f32, time_constant: f32) -> Self {
        let gain = sampling_period / (sampling_period + time_constant);
        Self((gain * RESOLUTION as f32 + 0.5) as u8)
    }

    pub fn try_from_time_constants(sampling_period: f32, time_constant: f32) -> Result<Self, Error> {
        let valid = |t: f32| t.is_finite() && t > 0.0;
        if !valid(sampling_period) || !valid(time_constant) {
            return Err(Error::InvalidTiming {
                sampling_period,
                time_constant,
            });
        }

        let gain = sampling_period / (sampling_period + time_constant);
        let scaled = libm::roundf(gain * RESOLUTION as f32);
        if !(1.0..=f32::from(u8::MAX)).contains(&scaled) {
            return Err(Error::CoefficientOutOfRange(scaled));
        }

        Ok(Self(scaled as u8))
    }

    /// Exact coefficient for the time constant `Tau = (2^shift - 1) * Ts`.
    ///
    /// Such a gain is `2^-shift`, so scaling keeps no rounding error.
    /// Returns `None` when the result would not fit in `1..=255`.
    pub const fn from_shift(shift: u32) -> Option<Self> {
        match RESOLUTION.checked_shr(shift) {
            Some(value) if value >= 1 && value <= u8::MAX as u32 => Some(Self(value as u8)),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn gain(self) -> f32 {
        f32::from(self.0) / RESOLUTION as f32
    }

    /// Time constant this coefficient realizes when updated every
    /// `sampling_period`.
    pub fn time_constant(self, sampling_period: f32) -> Option<f32> {
        if self.0 == 0 {
            return None;
        }
        Some(sampling_period * (RESOLUTION as f32 / f32::from(self.0) - 1.0))
    }
}

impl From<u8> for Coefficient {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Coefficient> for u8 {
    fn from(coefficient: Coefficient) -> u8 {
        coefficient.0
    }
}
