pub mod engine;
pub mod report;

pub use crate::domain::model::{Cuboid, LabeledBox, OutputFormat, OverflowPolicy};
pub use crate::domain::ports::BoxSource;
pub use crate::utils::error::Result;
