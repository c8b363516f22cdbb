//! Per-kind workout metric formulas and the summary record.
//!
//! Every metric is a pure function of one workout's parameters. Swimming
//! replaces the generic step-based distance/speed derivation entirely:
//! both come from pool length times lap count, so distance and speed stay
//! consistent with each other.

use serde::{Deserialize, Serialize};

use crate::workouts::types::{Running, Swimming, Walking, Workout, WorkoutKind};

/// Stride length in meters for step-based workouts.
const STEP_LENGTH_M: f64 = 0.65;
/// Meters per kilometer.
const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
const MIN_IN_H: f64 = 60.0;
/// Centimeters per meter.
const CM_IN_M: f64 = 100.0;
/// km/h to m/s conversion factor.
const KMH_IN_MS: f64 = 1000.0 / 60.0 / 60.0;

/// Running calorie model: slope applied to mean speed.
const RUNNING_SPEED_FACTOR: f64 = 18.0;
/// Running calorie model: constant speed offset.
const RUNNING_SPEED_OFFSET: f64 = 1.79;

/// Walking calorie model: weight coefficient.
const WALKING_WEIGHT_FACTOR: f64 = 0.035;
/// Walking calorie model: coefficient on squared speed over height.
const WALKING_SPEED_HEIGHT_FACTOR: f64 = 0.029;

/// Swimming calorie model: constant speed offset.
const SWIMMING_SPEED_OFFSET: f64 = 1.1;
/// Swimming calorie model: weight multiplier.
const SWIMMING_WEIGHT_FACTOR: f64 = 2.0;

/// Computed statistics for one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Which workout kind produced this record
    pub kind: WorkoutKind,
    /// Session duration in hours
    pub duration_h: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy burned in kilocalories
    pub calories: f64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories
        )
    }
}

/// Distance covered in kilometers.
pub fn distance_km(workout: &Workout) -> f64 {
    match workout {
        Workout::Running(r) => step_distance_km(r.action),
        Workout::Walking(w) => step_distance_km(w.action),
        Workout::Swimming(s) => pool_distance_km(s),
    }
}

/// Mean speed over the session in km/h.
pub fn mean_speed_kmh(workout: &Workout) -> f64 {
    distance_km(workout) / workout.duration_h()
}

/// Energy burned in kilocalories, using the kind-specific model.
pub fn spent_calories(workout: &Workout) -> f64 {
    match workout {
        Workout::Running(r) => running_calories(r),
        Workout::Walking(w) => walking_calories(w),
        Workout::Swimming(s) => swimming_calories(s),
    }
}

/// Evaluate one workout into its [`Summary`] record.
pub fn summarize(workout: &Workout) -> Summary {
    Summary {
        kind: workout.kind(),
        duration_h: workout.duration_h(),
        distance_km: distance_km(workout),
        mean_speed_kmh: mean_speed_kmh(workout),
        calories: spent_calories(workout),
    }
}

fn step_distance_km(action: u32) -> f64 {
    f64::from(action) * STEP_LENGTH_M / M_IN_KM
}

fn pool_distance_km(s: &Swimming) -> f64 {
    s.pool_length_m * f64::from(s.lap_count) / M_IN_KM
}

fn running_calories(r: &Running) -> f64 {
    let speed = step_distance_km(r.action) / r.duration_h;
    (RUNNING_SPEED_FACTOR * speed + RUNNING_SPEED_OFFSET) * r.weight_kg / M_IN_KM
        * r.duration_h
        * MIN_IN_H
}

fn walking_calories(w: &Walking) -> f64 {
    let speed_ms = step_distance_km(w.action) / w.duration_h * KMH_IN_MS;
    (WALKING_WEIGHT_FACTOR * w.weight_kg
        + speed_ms.powi(2) / (w.height_cm / CM_IN_M) * WALKING_SPEED_HEIGHT_FACTOR * w.weight_kg)
        * w.duration_h
        * MIN_IN_H
}

fn swimming_calories(s: &Swimming) -> f64 {
    let speed = pool_distance_km(s) / s.duration_h;
    (speed + SWIMMING_SPEED_OFFSET) * SWIMMING_WEIGHT_FACTOR * s.weight_kg * s.duration_h
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_running_distance_and_speed() {
        let run = Workout::Running(Running::new(15000, 1.0, 75.0).unwrap());

        assert!((distance_km(&run) - 9.75).abs() < EPSILON);
        assert!((mean_speed_kmh(&run) - 9.75).abs() < EPSILON);
    }

    #[test]
    fn test_swimming_uses_pool_laps_not_strokes() {
        // 720 strokes must not influence distance: 25 m x 40 laps = 1 km
        let swim = Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap());

        assert!((distance_km(&swim) - 1.0).abs() < EPSILON);
        assert!((mean_speed_kmh(&swim) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_summary_message_format() {
        let summary = Summary {
            kind: WorkoutKind::Swimming,
            duration_h: 1.0,
            distance_km: 1.0,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        };

        assert_eq!(
            summary.to_string(),
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 1.000 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }
}
