//! Two-state workflow gates guarding premature computation.

mod arming;
mod training;

pub use arming::{ArmingGate, GateState};
pub use training::{TrainingSession, TrainingState};
