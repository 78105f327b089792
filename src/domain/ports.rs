use crate::domain::model::{LabeledBox, OutputFormat, OverflowPolicy};
use crate::utils::error::Result;

/// Where a volume run gets its boxes and settings from.
pub trait BoxSource {
    fn boxes(&self) -> Result<Vec<LabeledBox>>;
    fn overflow_policy(&self) -> OverflowPolicy;
    fn output_format(&self) -> OutputFormat;

    fn allow_negative(&self) -> bool {
        false
    }

    fn report_name(&self) -> Option<&str> {
        None
    }
}
