//! Shared data models: the report schema module and display record structs.

pub mod report;

use serde::Serialize;

#[derive(Serialize)]
/// One finding prepared for display. `index` is the display-only sequence
/// position in the unfiltered list; it disambiguates list keys when a report
/// supplies duplicate ids and is recomputed per render pass.
pub struct FindingCard {
    pub index: usize,
    pub id: String,
    pub severity: String,
    pub category: String,
    pub name: String,
    /// Raw Markdown, left unrendered for an external renderer.
    pub description: String,
    pub file: String,
    pub start_line: u64,
    pub end_line: Option<u64>,
    pub identifiers: Vec<IdentifierRef>,
    /// Resolved source URL, empty when resolution failed.
    pub source_url: String,
}

#[derive(Serialize)]
/// Identifier entry for display, optionally hyperlinked.
pub struct IdentifierRef {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Serialize)]
/// Pagination metadata for the current slice.
pub struct PageInfo {
    pub page: usize,
    pub pages: usize,
    pub count: usize,
    pub page_size: usize,
    /// Pagination is only shown when the filtered count exceeds one page.
    pub paged: bool,
}

#[derive(Serialize)]
/// The visible slice plus its pagination metadata.
pub struct FindingsPage {
    pub items: Vec<FindingCard>,
    pub pager: PageInfo,
}

#[derive(Serialize)]
/// Report metadata header used by the summary printers.
pub struct ReportSummary {
    pub version: String,
    pub analyzer: String,
    pub analyzer_version: String,
    pub scanner: String,
    pub scanner_version: String,
    pub status: String,
    pub findings: usize,
}
