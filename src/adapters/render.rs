use crate::core::report::VolumeReport;
use crate::domain::model::OutputFormat;
use crate::utils::error::{BoxError, Result};

pub fn render(report: &VolumeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_table(report: &VolumeReport) -> String {
    let label_width = report
        .entries
        .iter()
        .map(|e| e.label.len())
        .chain(std::iter::once("label".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if let Some(name) = &report.name {
        out.push_str(&format!("# {}\n", name));
    }
    out.push_str(&format!(
        "{:<lw$}  {:>8}  {:>8}  {:>8}  {:>12}\n",
        "label",
        "width",
        "length",
        "height",
        "volume",
        lw = label_width
    ));
    for entry in &report.entries {
        out.push_str(&format!(
            "{:<lw$}  {:>8}  {:>8}  {:>8}  {:>12}\n",
            entry.label,
            entry.width,
            entry.length,
            entry.height,
            entry.volume,
            lw = label_width
        ));
    }
    out.push_str(&format!("total volume: {}\n", report.total_volume));
    out
}

const CSV_HEADER: [&str; 5] = ["label", "width", "length", "height", "volume"];

fn render_csv(report: &VolumeReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for entry in &report.entries {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BoxError::IoError(e.into_error()))?;
    utf8_output(bytes)
}

fn utf8_output(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        BoxError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
