pub mod constants;
pub mod error;
pub mod prize_list;
pub mod profanity;
pub mod rotation;
pub mod shared_prize_wheel;
pub mod spin_sequencer;
pub mod validation;
pub mod wheel_config;
pub mod wheel_geometry;

pub use error::{WheelError, WheelResult};
pub use shared_prize_wheel::*;
pub use spin_sequencer::{Clock, OutcomeSource, SpinEffects, SpinSequencer, SpinTiming};
