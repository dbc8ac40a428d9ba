//! Fitness tracker calculator.
//!
//! Turns a raw sensor package (an activity code plus positional numbers) into
//! distance, mean speed and calories burned, and renders a one-line summary.
//!
//! ```rust
//! use workouts::{Training, read_package};
//!
//! let reading = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! assert!((reading.distance_km() - 9.75).abs() < 1e-9);
//! println!("{}", reading.summary().message());
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod message;
pub mod models;
pub mod training;

pub use dispatch::{parse_fields, read_package, read_raw_package};
pub use errors::WorkoutError;
pub use models::{
    ActivityKind, RunningReading, SwimmingReading, WalkingReading, WorkoutReading, WorkoutSummary,
};
pub use training::Training;

/// Dispatches a package and computes its summary.
pub fn summarize(code: &str, fields: &[f64]) -> Result<WorkoutSummary, WorkoutError> {
    read_package(code, fields).map(|reading| reading.summary())
}
