use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::WorkoutError;

/// The three supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Short code used by the sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Exact, case-sensitive code lookup.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Number of positional fields a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "Walking",
            ActivityKind::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningReading {
    pub action: f64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingReading {
    pub action: f64,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingReading {
    /// Strokes. Recorded but not used by the swimming formulas.
    pub action: f64,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_count: f64,
}

/// A validated reading, tagged by the kind it was dispatched to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutReading {
    Running(RunningReading),
    Walking(WalkingReading),
    Swimming(SwimmingReading),
}

/// Result of one workout. Built once per reading and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub kind: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}
