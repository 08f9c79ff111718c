use super::coefficient::Coefficient;
use super::state::FilterState;
use crate::error::Error;

/// Timing of a single filtered signal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Value the filter starts settled on.
    pub seed: u16,
    /// Period between two calls of [`Channel::tick`], `Ts`.
    pub sampling_period: f32,
    /// Time constant of the filter, `Tau`, in the unit of `sampling_period`.
    pub time_constant: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            sampling_period: 0.001,
            time_constant: 0.015,
        }
    }
}

/// Filter state bundled with the coefficient it is advanced with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    state: FilterState,
    coefficient: Coefficient,
}

impl Channel {
    pub const fn new(seed: u16, coefficient: Coefficient) -> Self {
        Self {
            state: FilterState::new(seed),
            coefficient,
        }
    }

    /// Validate the timing and the seed, and derive the coefficient.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let coefficient = match Coefficient::try_from_time_constants(
            config.sampling_period,
            config.time_constant,
        ) {
            Ok(coefficient) => coefficient,
            Err(error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Rejected channel config={:?}: {:?}", config, error);
                return Err(error);
            }
        };
        let state = FilterState::try_new(config.seed)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Channel initialized seed={} coefficient={}",
            config.seed,
            coefficient.value()
        );

        Ok(Self { state, coefficient })
    }

    #[inline]
    pub fn tick(&mut self, input: u16) -> u16 {
        self.state.update(input, self.coefficient)
    }

    pub fn try_tick(&mut self, input: u16) -> Result<u16, Error> {
        self.state.try_update(input, self.coefficient)
    }

    pub fn reset(&mut self, seed: u16) {
        self.state.reset(seed);
    }

    pub fn output(&self) -> u16 {
        self.state.output()
    }

    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }
}
