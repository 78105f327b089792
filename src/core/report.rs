use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub width: i32,
    pub length: i32,
    pub height: i32,
    pub volume: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub entries: Vec<ReportEntry>,
    pub total_volume: i64,
}
