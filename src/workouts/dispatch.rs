//! Sensor package dispatch.
//!
//! A package is a three-letter type tag plus a positional list of raw
//! numbers. The tag selects the workout kind; the list must match that
//! kind's parameter count and order exactly.

use crate::workouts::types::{Running, Swimming, Walking, Workout, WorkoutError, WorkoutKind};

/// Tags accepted on the wire, in the order reported by error messages.
pub const ACCEPTED_TAGS: [&str; 3] = ["SWM", "RUN", "WLK"];

const RUN_ARITY: usize = 3;
const WLK_ARITY: usize = 4;
const SWM_ARITY: usize = 5;

/// Decode one `(tag, data)` sensor package into a validated [`Workout`].
///
/// Data order per tag:
/// - `RUN` → `[action, duration, weight]`
/// - `WLK` → `[action, duration, weight, height]`
/// - `SWM` → `[action, duration, weight, pool_length, lap_count]`
pub fn parse_package(tag: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    match tag {
        "RUN" => {
            check_arity(WorkoutKind::Running, RUN_ARITY, data)?;
            Ok(Workout::Running(Running::new(
                data[0] as u32,
                data[1],
                data[2],
            )?))
        }
        "WLK" => {
            check_arity(WorkoutKind::Walking, WLK_ARITY, data)?;
            Ok(Workout::Walking(Walking::new(
                data[0] as u32,
                data[1],
                data[2],
                data[3],
            )?))
        }
        "SWM" => {
            check_arity(WorkoutKind::Swimming, SWM_ARITY, data)?;
            Ok(Workout::Swimming(Swimming::new(
                data[0] as u32,
                data[1],
                data[2],
                data[3],
                data[4] as u32,
            )?))
        }
        other => Err(WorkoutError::UnknownTag {
            tag: other.to_string(),
            accepted: &ACCEPTED_TAGS,
        }),
    }
}

fn check_arity(kind: WorkoutKind, expected: usize, data: &[f64]) -> Result<(), WorkoutError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(WorkoutError::ArityMismatch {
            kind,
            expected,
            actual: data.len(),
        })
    }
}
