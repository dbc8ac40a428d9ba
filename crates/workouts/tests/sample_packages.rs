//! End-to-end checks over the three reference workouts.

use workouts::{
    ActivityKind, Training, WorkoutError, config::sample_packages, summarize,
};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn running_sample() {
    let summary = summarize("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(summary.kind, ActivityKind::Running);
    approx(summary.duration_h, 1.0);
    approx(summary.distance_km, 9.75);
    approx(summary.speed_kmh, 9.75);
    approx(summary.calories, 797.805);
}

#[test]
fn walking_sample() {
    let summary = summarize("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(summary.kind, ActivityKind::Walking);
    approx(summary.distance_km, 5.85);
    approx(summary.speed_kmh, 5.85);
    approx(summary.calories, 159.414);
}

#[test]
fn swimming_sample() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(summary.kind, ActivityKind::Swimming);
    approx(summary.distance_km, 1.0);
    approx(summary.speed_kmh, 1.0);
    approx(summary.calories, 336.0);
    assert_eq!(
        summary.message(),
        "Workout type: Swimming; Duration: 1.000 h; Distance: 1.000 km; \
         Avg speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn sample_packages_render_three_decimals() {
    for package in sample_packages() {
        let message = package
            .reading()
            .unwrap()
            .summary()
            .message();
        let numbers: Vec<&str> = message
            .trim_end_matches('.')
            .split(';')
            .filter_map(|part| part.split_whitespace().find(|w| w.contains('.')))
            .collect();
        assert_eq!(numbers.len(), 4, "{message}");
        for number in numbers {
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3, "{message}");
        }
    }
}

#[test]
fn failures_return_no_summary() {
    assert!(matches!(
        summarize("YGA", &[1.0, 1.0, 1.0]),
        Err(WorkoutError::UnknownActivityCode(_))
    ));
    assert!(matches!(
        summarize("WLK", &[9000.0, 1.0, 75.0]),
        Err(WorkoutError::ArityMismatch { .. })
    ));
    assert!(matches!(
        summarize("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]),
        Err(WorkoutError::InvalidNumericInput(_))
    ));
}

#[test]
fn overflowing_inputs_return_no_summary() {
    for (code, fields) in [
        ("RUN", vec![15000.0, 5e-324, 75.0]),
        ("SWM", vec![720.0, 1.0, 80.0, 1e200, 1e200]),
    ] {
        let err = summarize(code, &fields).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidNumericInput(_)), "{err}");
    }
}

#[test]
fn summary_serializes_to_json() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["kind"], "Swimming");
    assert_eq!(json["distance_km"], 1.0);
}
