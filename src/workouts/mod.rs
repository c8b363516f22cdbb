//! Workout types and sensor package dispatch.

pub mod dispatch;
pub mod types;

pub use dispatch::{parse_package, ACCEPTED_TAGS};
pub use types::{Running, Swimming, Walking, Workout, WorkoutError, WorkoutKind};
