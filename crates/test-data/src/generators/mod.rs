//! Entity generators for test data.
//!
//! - [`PackageGenerator`]: sensor packages with realistic athlete parameters

pub mod package;

pub use package::{PackageGenConfig, PackageGenerator, to_env_json};
