//! Resolves an activity code and positional fields into a typed reading.

use tracing::{debug, warn};

use crate::{
    errors::WorkoutError,
    models::{ActivityKind, RunningReading, SwimmingReading, WalkingReading, WorkoutReading},
    training::Training,
};

/// Builds the reading for `code` from `fields`, in the kind's fixed field order.
pub fn read_package(code: &str, fields: &[f64]) -> Result<WorkoutReading, WorkoutError> {
    let kind = code.parse::<ActivityKind>().inspect_err(|e| warn!("{e}"))?;

    if fields.len() != kind.arity() {
        let err = WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: fields.len(),
        };
        warn!("{err}");
        return Err(err);
    }

    let reading = match kind {
        ActivityKind::Running => WorkoutReading::Running(RunningReading {
            action: fields[0],
            duration_h: fields[1],
            weight_kg: fields[2],
        }),
        ActivityKind::Walking => WorkoutReading::Walking(WalkingReading {
            action: fields[0],
            duration_h: fields[1],
            weight_kg: fields[2],
            height_cm: fields[3],
        }),
        ActivityKind::Swimming => WorkoutReading::Swimming(SwimmingReading {
            action: fields[0],
            duration_h: fields[1],
            weight_kg: fields[2],
            pool_length_m: fields[3],
            pool_count: fields[4],
        }),
    };

    validate(&reading)
        .and_then(|()| check_derived(&reading))
        .inspect_err(|e| warn!(code, "{e}"))?;
    debug!(?reading, "dispatched package");
    Ok(reading)
}

/// Converts textual sensor fields to numbers.
pub fn parse_fields<S: AsRef<str>>(fields: &[S]) -> Result<Vec<f64>, WorkoutError> {
    fields
        .iter()
        .map(|field| {
            let text = field.as_ref().trim();
            text.parse::<f64>().map_err(|_| {
                WorkoutError::InvalidNumericInput(format!("{text:?} is not a number"))
            })
        })
        .collect()
}

/// Parses textual fields and dispatches them in one step.
pub fn read_raw_package<S: AsRef<str>>(
    code: &str,
    fields: &[S],
) -> Result<WorkoutReading, WorkoutError> {
    let numbers = parse_fields(fields)?;
    read_package(code, &numbers)
}

fn positive(field: &str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid(field, value, "positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid(field, value, "non-negative"))
    }
}

fn validate(reading: &WorkoutReading) -> Result<(), WorkoutError> {
    match reading {
        WorkoutReading::Running(r) => {
            non_negative("action", r.action)?;
            positive("duration", r.duration_h)?;
            positive("weight", r.weight_kg)
        }
        WorkoutReading::Walking(r) => {
            non_negative("action", r.action)?;
            positive("duration", r.duration_h)?;
            positive("weight", r.weight_kg)?;
            positive("height", r.height_cm)
        }
        WorkoutReading::Swimming(r) => {
            non_negative("action", r.action)?;
            positive("duration", r.duration_h)?;
            positive("weight", r.weight_kg)?;
            positive("pool length", r.pool_length_m)?;
            non_negative("pool count", r.pool_count)
        }
    }
}

/// Finite inputs can still overflow, e.g. a subnormal duration.
fn check_derived(reading: &WorkoutReading) -> Result<(), WorkoutError> {
    let derived = [
        ("distance", reading.distance_km()),
        ("mean speed", reading.mean_speed_kmh()),
        ("calories", reading.spent_calories()),
    ];
    for (field, value) in derived {
        if !value.is_finite() {
            return Err(WorkoutError::invalid(field, value, "finite"));
        }
    }
    Ok(())
}
