//! SAST report schema and the lenient shape adapter.
//!
//! A value counts as a report when it carries a `scan` object and, if the
//! `vulnerabilities` key is present, it is a sequence. Everything else is
//! best-effort: scalar fields are optional and default when absent, so
//! reports missing non-critical fields still load. Callers get `None` for
//! anything that does not match the shape; nothing here errors loudly.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Top-level report document. Replaced wholesale when new input arrives.
pub struct ScanReport {
    #[serde(default)]
    pub version: Option<String>,
    pub scan: Scan,
    #[serde(default)]
    pub vulnerabilities: Option<Vec<Finding>>,
}

impl ScanReport {
    /// Findings in input order; absent key reads as an empty list.
    pub fn findings(&self) -> &[Finding] {
        self.vulnerabilities.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Scan metadata block.
pub struct Scan {
    #[serde(default)]
    pub analyzer: Option<Tool>,
    #[serde(default)]
    pub scanner: Option<Tool>,
    #[serde(default, rename = "type")]
    pub scan_type: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Analyzer/scanner descriptor inside the scan block.
pub struct Tool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub vendor: Option<Vendor>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vendor {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// One reported issue. `id` is unique within a report, not globally.
pub struct Finding {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text Markdown, handed to an external renderer as-is.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cve: Option<String>,
    /// Open-ended label set: Critical/High/Medium/Low or anything else.
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// File path plus line range. Well-formed input has a non-empty relative
/// `file` and `start_line >= 1`; the adapter does not enforce either.
pub struct Location {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub start_line: u64,
    #[serde(default)]
    pub end_line: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Reference to an external vulnerability database entry.
pub struct Identifier {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parse raw text into a report, or `None` when the text is not valid JSON
/// or does not structurally resemble a report.
pub fn from_str(raw: &str) -> Option<ScanReport> {
    serde_json::from_str(raw).ok()
}

/// Adapt an already-parsed JSON value into a report, or `None`.
pub fn from_value(value: serde_json::Value) -> Option<ScanReport> {
    serde_json::from_value(value).ok()
}
