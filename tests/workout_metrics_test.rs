//! Unit tests for workout metric calculations and summary rendering.
//!
//! Reference packages match the sample sensor data fed by the binary:
//! SWM [720, 1, 80, 25, 40], RUN [15000, 1, 75], WLK [9000, 1, 75, 180].

use tritrack::{parse_package, summarize, WorkoutKind};

const EPSILON: f64 = 1e-6;

#[test]
fn test_running_reference_package() {
    let workout = parse_package("RUN", &[15000.0, 1.0, 75.0]).expect("valid RUN package");
    let summary = summarize(&workout);

    assert_eq!(summary.kind, WorkoutKind::Running);
    assert!((summary.distance_km - 9.75).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 9.75).abs() < EPSILON);
    // (18 * 9.75 + 1.79) * 75 / 1000 * 1 * 60
    assert!((summary.calories - 797.805).abs() < EPSILON);
}

#[test]
fn test_walking_reference_package() {
    let workout = parse_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("valid WLK package");
    let summary = summarize(&workout);

    assert_eq!(summary.kind, WorkoutKind::Walking);
    assert!((summary.distance_km - 5.85).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 5.85).abs() < EPSILON);
    // (0.035 * 75 + (1.625^2 / 1.8) * 0.029 * 75) * 1 * 60
    assert!((summary.calories - 348.9453125).abs() < EPSILON);
}

#[test]
fn test_swimming_reference_package() {
    let workout =
        parse_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("valid SWM package");
    let summary = summarize(&workout);

    assert_eq!(summary.kind, WorkoutKind::Swimming);
    // 25 m x 40 laps = 1 km; the 720 strokes are not part of the distance
    assert!((summary.distance_km - 1.0).abs() < EPSILON);
    assert!((summary.mean_speed_kmh - 1.0).abs() < EPSILON);
    // (1.0 + 1.1) * 2 * 80 * 1
    assert!((summary.calories - 336.0).abs() < EPSILON);
}

#[test]
fn test_dispatch_is_idempotent() {
    let data = [15000.0, 1.0, 75.0];

    let first = summarize(&parse_package("RUN", &data).unwrap());
    let second = summarize(&parse_package("RUN", &data).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_summary_lines_render_three_decimals() {
    let cases: [(&str, &[f64], &str); 3] = [
        (
            "RUN",
            &[15000.0, 1.0, 75.0],
            "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 797.805.",
        ),
        (
            "WLK",
            &[9000.0, 1.0, 75.0, 180.0],
            "Workout type: Walking; Duration: 1.000 h.; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 348.945.",
        ),
        (
            "SWM",
            &[720.0, 1.0, 80.0, 25.0, 40.0],
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 1.000 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000.",
        ),
    ];

    for (tag, data, expected) in cases {
        let summary = summarize(&parse_package(tag, data).unwrap());
        assert_eq!(summary.to_string(), expected, "line mismatch for {tag}");
    }
}

#[test]
fn test_summary_serializes_with_snake_case_kind() {
    let summary = summarize(&parse_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap());

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["kind"], "swimming");
    assert_eq!(json["duration_h"], 1.0);
}
