use crate::domain::model::{Cuboid, LabeledBox, OutputFormat, OverflowPolicy};
use crate::domain::ports::BoxSource;
use crate::utils::error::{BoxError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "box-volume")]
#[command(about = "Compute the volume of rectangular boxes")]
pub struct CliConfig {
    /// TOML file listing the boxes to measure
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Add a cube with this side length (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    pub cube: Vec<i32>,

    /// Add a box as WIDTH,LENGTH,HEIGHT (repeatable)
    #[arg(long, value_parser = parse_dims, allow_negative_numbers = true)]
    pub dims: Vec<Cuboid>,

    /// Add an all-zero box
    #[arg(long)]
    pub empty: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Skip the non-negative dimension check
    #[arg(long)]
    pub allow_negative: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn has_boxes(&self) -> bool {
        self.empty || !self.cube.is_empty() || !self.dims.is_empty()
    }

    /// Boxes named on the command line, in the order: empty, cubes, dims.
    pub fn explicit_boxes(&self) -> Vec<LabeledBox> {
        let mut boxes = Vec::new();
        if self.empty {
            boxes.push(LabeledBox::new("empty", Cuboid::default()));
        }
        for &side in &self.cube {
            boxes.push(LabeledBox::new(format!("cube-{}", side), Cuboid::cube(side)));
        }
        for dims in &self.dims {
            let (w, l, h) = dims.dimensions();
            boxes.push(LabeledBox::new(format!("box-{}x{}x{}", w, l, h), *dims));
        }
        boxes
    }
}

impl BoxSource for CliConfig {
    fn boxes(&self) -> Result<Vec<LabeledBox>> {
        if self.has_boxes() {
            Ok(self.explicit_boxes())
        } else {
            Ok(LabeledBox::demo_set())
        }
    }

    fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn allow_negative(&self) -> bool {
        self.allow_negative
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if !path.is_file() {
                return Err(BoxError::ConfigError {
                    message: format!("config file '{}' does not exist", path.display()),
                });
            }
        }
        Ok(())
    }
}

fn parse_dims(raw: &str) -> std::result::Result<Cuboid, String> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid dimension in '{}': {}", raw, e))?;

    match parts.as_slice() {
        &[w, l, h] => Ok(Cuboid::new(w, l, h)),
        _ => Err(format!(
            "expected WIDTH,LENGTH,HEIGHT but got {} values",
            parts.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dims() {
        assert_eq!(parse_dims("5,8,12").unwrap(), Cuboid::new(5, 8, 12));
        assert_eq!(parse_dims(" 2, 4 ,6 ").unwrap(), Cuboid::new(2, 4, 6));
        assert!(parse_dims("5,8").is_err());
        assert!(parse_dims("5,8,x").is_err());
    }

    #[test]
    fn test_no_box_flags_gives_demo_set() {
        let cli = CliConfig::parse_from(["box-volume"]);
        assert!(!cli.has_boxes());
        assert_eq!(cli.boxes().unwrap(), LabeledBox::demo_set());
        assert_eq!(cli.output_format(), OutputFormat::Table);
        assert_eq!(cli.overflow_policy(), OverflowPolicy::Error);
    }

    #[test]
    fn test_box_flags() {
        let cli = CliConfig::parse_from([
            "box-volume",
            "--cube",
            "3",
            "--dims",
            "1,2,3",
            "--empty",
            "--format",
            "csv",
            "--overflow",
            "saturate",
        ]);
        let boxes = cli.boxes().unwrap();
        let labels: Vec<&str> = boxes.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["empty", "cube-3", "box-1x2x3"]);
        assert_eq!(boxes[1].cuboid, Cuboid::cube(3));
        assert_eq!(cli.output_format(), OutputFormat::Csv);
        assert_eq!(cli.overflow_policy(), OverflowPolicy::Saturate);
    }

    #[test]
    fn test_integer_is_not_a_dims_value() {
        assert!(CliConfig::try_parse_from(["box-volume", "--dims", "5"]).is_err());
    }

    #[test]
    fn test_missing_config_file_fails_validation() {
        let cli = CliConfig::parse_from(["box-volume", "--config", "/nonexistent/boxes.toml"]);
        assert!(matches!(cli.validate(), Err(BoxError::ConfigError { .. })));
        assert!(CliConfig::parse_from(["box-volume"]).validate().is_ok());
    }

    #[test]
    fn test_negative_cube_parses() {
        let cli = CliConfig::parse_from(["box-volume", "--cube", "-2", "--allow-negative"]);
        assert_eq!(cli.cube, vec![-2]);
        assert!(cli.allow_negative());
    }
}
