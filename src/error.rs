#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("Sample {0} exceeds the 10-bit range")]
    SampleOutOfRange(u16),
    #[error("Invalid timing Ts={sampling_period} Tau={time_constant}")]
    InvalidTiming {
        sampling_period: f32,
        time_constant: f32,
    },
    #[error("Scaled gain {0} does not fit the coefficient")]
    CoefficientOutOfRange(f32),
}
