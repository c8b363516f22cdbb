//! Workout parameter types and errors.
//!
//! Each workout kind carries the raw readings one sensor package produces:
//! an action count (steps or strokes), the session duration in hours, and
//! the athlete's weight, plus kind-specific extras. Constructors validate
//! the physical inputs so the metric formulas downstream are total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Walking => write!(f, "Walking"),
            WorkoutKind::Swimming => write!(f, "Swimming"),
        }
    }
}

/// A running session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Step count from the wrist sensor
    pub action: u32,
    /// Session duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Running {
    /// Build a running session, rejecting non-positive duration or weight.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        ensure_positive(WorkoutKind::Running, "duration", duration_h)?;
        ensure_positive(WorkoutKind::Running, "weight", weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

/// A sports walking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walking {
    /// Step count from the wrist sensor
    pub action: u32,
    /// Session duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl Walking {
    /// Build a walking session, rejecting non-positive duration, weight, or height.
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        ensure_positive(WorkoutKind::Walking, "duration", duration_h)?;
        ensure_positive(WorkoutKind::Walking, "weight", weight_kg)?;
        ensure_positive(WorkoutKind::Walking, "height", height_cm)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        })
    }
}

/// A swimming session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Stroke count from the wrist sensor; the metric formulas derive
    /// distance from pool laps instead
    pub action: u32,
    /// Session duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of completed laps
    pub lap_count: u32,
}

impl Swimming {
    /// Build a swimming session, rejecting non-positive duration or weight.
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        ensure_positive(WorkoutKind::Swimming, "duration", duration_h)?;
        ensure_positive(WorkoutKind::Swimming, "weight", weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            lap_count,
        })
    }
}

/// One evaluated workout, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// The kind tag of this workout.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Walking(_) => WorkoutKind::Walking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Session duration in hours.
    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running(r) => r.duration_h,
            Workout::Walking(w) => w.duration_h,
            Workout::Swimming(s) => s.duration_h,
        }
    }
}

/// Errors from decoding a sensor package into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Tag is not in the accepted set
    #[error("unknown workout tag \"{tag}\", expected one of {accepted:?}")]
    UnknownTag {
        tag: String,
        accepted: &'static [&'static str],
    },

    /// Positional data length does not match the kind's parameter count
    #[error("{kind} package expects {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// Zero or negative value where physics requires a positive one
    #[error("invalid {field} for {kind}: {value} (must be positive)")]
    InvalidInput {
        kind: WorkoutKind,
        field: &'static str,
        value: f64,
    },
}

fn ensure_positive(kind: WorkoutKind, field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidInput { kind, field, value })
    }
}
