pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LayeredConfig};

pub use config::TomlConfig;
pub use core::{engine::VolumeEngine, report::VolumeReport};
pub use domain::model::{Cuboid, LabeledBox, OutputFormat, OverflowPolicy};
pub use domain::ports::BoxSource;
pub use utils::error::{BoxError, Result};
