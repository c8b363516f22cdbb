//! TriTrack - Fitness Tracker Module
//!
//! Computes workout statistics (distance, mean speed, calories burned)
//! from raw sensor packages for running, walking, and swimming sessions,
//! and renders a formatted summary line per workout.

pub mod metrics;
pub mod workouts;

// Re-export commonly used types
pub use metrics::calculator::{summarize, Summary};
pub use workouts::dispatch::{parse_package, ACCEPTED_TAGS};
pub use workouts::types::{Workout, WorkoutError, WorkoutKind};
