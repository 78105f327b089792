use crate::domain::model::{Cuboid, LabeledBox, OutputFormat, OverflowPolicy};
use crate::domain::ports::BoxSource;
use crate::utils::error::{BoxError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BOX_KINDS: [&str; 3] = ["default", "cube", "dimensions"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub boxes: Vec<BoxEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: Option<String>,
    pub format: Option<OutputFormat>,
    pub overflow: Option<OverflowPolicy>,
    pub allow_negative: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxEntry {
    pub label: Option<String>,
    pub kind: String,
    pub side: Option<i32>,
    pub width: Option<i32>,
    pub length: Option<i32>,
    pub height: Option<i32>,
}

impl BoxEntry {
    /// Builds the box this entry describes. `index` is only used in error
    /// field names.
    pub fn to_cuboid(&self, index: usize) -> Result<Cuboid> {
        let field = |name: &str| format!("boxes[{}].{}", index, name);
        validate_one_of(&field("kind"), &self.kind, &BOX_KINDS)?;

        match self.kind.as_str() {
            "cube" => {
                let side = validate_required_field(&field("side"), &self.side)?;
                Ok(Cuboid::cube(*side))
            }
            "dimensions" => {
                let width = validate_required_field(&field("width"), &self.width)?;
                let length = validate_required_field(&field("length"), &self.length)?;
                let height = validate_required_field(&field("height"), &self.height)?;
                Ok(Cuboid::new(*width, *length, *height))
            }
            _ => Ok(Cuboid::default()),
        }
    }

    pub fn label_or_default(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("box-{}", index))
    }
}

impl TomlConfig {
    /// Loads a config file, substituting `${VAR}` from the environment first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoxError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BoxError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.boxes.is_empty() {
            return Err(BoxError::ConfigError {
                message: "at least one [[boxes]] entry is required".to_string(),
            });
        }

        if let Some(name) = self.report.as_ref().and_then(|r| r.name.as_deref()) {
            validate_non_empty_string("report.name", name)?;
        }

        for (index, entry) in self.boxes.iter().enumerate() {
            entry.to_cuboid(index)?;
        }

        Ok(())
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|r| r.format)
    }

    pub fn report_overflow(&self) -> Option<OverflowPolicy> {
        self.report.as_ref().and_then(|r| r.overflow)
    }
}

impl BoxSource for TomlConfig {
    fn boxes(&self) -> Result<Vec<LabeledBox>> {
        self.boxes
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Ok(LabeledBox::new(
                    entry.label_or_default(index),
                    entry.to_cuboid(index)?,
                ))
            })
            .collect()
    }

    fn overflow_policy(&self) -> OverflowPolicy {
        self.report_overflow().unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.report_format().unwrap_or_default()
    }

    fn allow_negative(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|r| r.allow_negative)
            .unwrap_or(false)
    }

    fn report_name(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.name.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
