#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{LabeledBox, OutputFormat, OverflowPolicy};
#[cfg(feature = "cli")]
use crate::domain::ports::BoxSource;
#[cfg(feature = "cli")]
use crate::utils::error::Result;

/// A config file with command-line flags layered on top. Flags win for
/// settings; boxes from both are measured, file entries first.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub file: TomlConfig,
    pub cli: CliConfig,
}

#[cfg(feature = "cli")]
impl LayeredConfig {
    pub fn new(file: TomlConfig, cli: CliConfig) -> Self {
        Self { file, cli }
    }
}

#[cfg(feature = "cli")]
impl BoxSource for LayeredConfig {
    fn boxes(&self) -> Result<Vec<LabeledBox>> {
        let mut boxes = self.file.boxes()?;
        boxes.extend(self.cli.explicit_boxes());
        Ok(boxes)
    }

    fn overflow_policy(&self) -> OverflowPolicy {
        self.cli
            .overflow
            .unwrap_or_else(|| self.file.overflow_policy())
    }

    fn output_format(&self) -> OutputFormat {
        self.cli.format.unwrap_or_else(|| self.file.output_format())
    }

    fn allow_negative(&self) -> bool {
        self.cli.allow_negative || self.file.allow_negative()
    }

    fn report_name(&self) -> Option<&str> {
        self.file.report_name()
    }
}
