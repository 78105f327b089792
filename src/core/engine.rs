use crate::core::report::{ReportEntry, VolumeReport};
use crate::domain::ports::BoxSource;
use crate::utils::error::{BoxError, Result};
use crate::utils::validation::Validate;

pub struct VolumeEngine<S: BoxSource> {
    source: S,
}

impl<S: BoxSource> VolumeEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn run(&self) -> Result<VolumeReport> {
        let boxes = self.source.boxes()?;
        let policy = self.source.overflow_policy();
        tracing::info!("Measuring {} boxes (overflow: {:?})", boxes.len(), policy);

        let mut entries = Vec::with_capacity(boxes.len());
        let mut total: i64 = 0;

        for labeled in boxes {
            if !self.source.allow_negative() {
                labeled.cuboid.validate().map_err(|e| match e {
                    BoxError::InvalidConfigValueError {
                        field,
                        value,
                        reason,
                    } => BoxError::InvalidConfigValueError {
                        field: format!("{}.{}", labeled.label, field),
                        value,
                        reason,
                    },
                    other => other,
                })?;
            }

            let volume = labeled.cuboid.volume_with(policy)?;
            tracing::debug!("{} ({}) -> {}", labeled.label, labeled.cuboid, volume);

            let (width, length, height) = labeled.cuboid.dimensions();
            total = add_to_total(total, volume, entries.len() + 1)?;

            entries.push(ReportEntry {
                label: labeled.label,
                width,
                length,
                height,
                volume,
            });
        }

        let report = VolumeReport {
            name: self.source.report_name().map(str::to_string),
            entries,
            total_volume: total,
        };
        tracing::info!(
            "Measured {} boxes, total volume {}",
            report.entries.len(),
            report.total_volume
        );
        Ok(report)
    }
}

fn add_to_total(total: i64, volume: i32, entries: usize) -> Result<i64> {
    total
        .checked_add(i64::from(volume))
        .ok_or(BoxError::TotalOverflowError { entries })
}
