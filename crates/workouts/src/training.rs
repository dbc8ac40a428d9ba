//! Distance, speed and calorie formulas per activity kind.
//!
//! All values are kept at full precision; rounding only happens when a
//! summary is rendered.

use crate::models::{
    ActivityKind, RunningReading, SwimmingReading, WalkingReading, WorkoutReading, WorkoutSummary,
};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
/// Step length in meters, shared by running and walking.
const LEN_STEP_M: f64 = 0.65;
const KMH_IN_MS: f64 = 1000.0 / 3600.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

pub trait Training {
    fn kind(&self) -> ActivityKind;
    fn duration_h(&self) -> f64;
    fn distance_km(&self) -> f64;
    fn spent_calories(&self) -> f64;

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            kind: self.kind(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

fn step_distance_km(action: f64) -> f64 {
    action * LEN_STEP_M / M_IN_KM
}

impl Training for RunningReading {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        step_distance_km(self.action)
    }

    fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}

impl Training for WalkingReading {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn distance_km(&self) -> f64 {
        step_distance_km(self.action)
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MS;
        (WLK_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms.powi(2) / self.height_cm * WLK_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}

impl Training for SwimmingReading {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    // Pool laps, not strokes.
    fn distance_km(&self) -> f64 {
        self.pool_length_m * self.pool_count / M_IN_KM
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWM_SPEED_SHIFT)
            * SWM_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

macro_rules! delegate {
    ($reading:expr, $method:ident) => {
        match $reading {
            WorkoutReading::Running(r) => r.$method(),
            WorkoutReading::Walking(r) => r.$method(),
            WorkoutReading::Swimming(r) => r.$method(),
        }
    };
}

impl Training for WorkoutReading {
    fn kind(&self) -> ActivityKind {
        delegate!(self, kind)
    }

    fn duration_h(&self) -> f64 {
        delegate!(self, duration_h)
    }

    fn distance_km(&self) -> f64 {
        delegate!(self, distance_km)
    }

    fn mean_speed_kmh(&self) -> f64 {
        delegate!(self, mean_speed_kmh)
    }

    fn spent_calories(&self) -> f64 {
        delegate!(self, spent_calories)
    }
}
