mod bank;
mod channel;
mod coefficient;
mod state;

pub use self::bank::FilterBank;
pub use self::channel::{Channel, Config};
pub use self::coefficient::Coefficient;
pub use self::state::{FilterState, MAX_SAMPLE, RESOLUTION, RESOLUTION_BITS};
