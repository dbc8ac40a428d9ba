//! Test data generation for workouts.
//!
//! Produces realistic sensor packages for every activity kind so the
//! calculator can be exercised beyond the three reference workouts.
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let package = PackageGenerator::new().generate(ActivityKind::Walking, &mut rng);
//! assert_eq!(package.numbers().unwrap().len(), 4);
//! ```

pub mod generators;

pub use workouts::config::{Package, sample_packages};
pub use workouts::ActivityKind;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::generators::{PackageGenConfig, PackageGenerator, to_env_json};
    pub use crate::{ActivityKind, Package, sample_packages};
}
