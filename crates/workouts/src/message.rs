use std::fmt;

use crate::models::WorkoutSummary;

impl WorkoutSummary {
    /// Human-readable one-line summary, every number shown with three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}
