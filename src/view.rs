//! View assembly: turns a report plus the current selections into display
//! records. Recomputed from scratch on every pass, so sequence indices from
//! a previous report can never leak into a new one.

use crate::filter::{self, FilterState, IndexedFinding};
use crate::link;
use crate::models::report::ScanReport;
use crate::models::{FindingCard, FindingsPage, IdentifierRef, ReportSummary};

const FALLBACK: &str = "N/A";

fn or_fallback(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| FALLBACK.to_string())
}

/// Build the visible findings page: filter, paginate, then resolve a source
/// link for each visible finding against the repository base.
pub fn build_page(
    report: &ScanReport,
    filter: &FilterState,
    page: usize,
    repo: &str,
) -> FindingsPage {
    let selected = filter::select_page(report.findings(), filter, page);
    let items = selected
        .visible
        .into_iter()
        .map(|it| card(it, repo))
        .collect();
    FindingsPage {
        items,
        pager: selected.pager,
    }
}

fn card(it: IndexedFinding, repo: &str) -> FindingCard {
    let f = it.finding;
    let source_url = link::resolve_source_url(repo, &f.location);
    FindingCard {
        index: it.index,
        id: or_fallback(&f.id),
        severity: or_fallback(&f.severity),
        category: or_fallback(&f.category),
        name: or_fallback(&f.name),
        description: f.description.unwrap_or_default(),
        file: f.location.file,
        start_line: f.location.start_line,
        end_line: f.location.end_line,
        identifiers: f
            .identifiers
            .into_iter()
            .map(|i| IdentifierRef {
                name: i.name,
                url: i.url,
            })
            .collect(),
        source_url,
    }
}

/// Report metadata header with `N/A` placeholders for absent fields.
pub fn summarize(report: &ScanReport) -> ReportSummary {
    let scan = &report.scan;
    let analyzer = scan.analyzer.as_ref();
    let scanner = scan.scanner.as_ref();
    ReportSummary {
        version: or_fallback(&report.version),
        analyzer: or_fallback(&analyzer.and_then(|t| t.name.clone())),
        analyzer_version: or_fallback(&analyzer.and_then(|t| t.version.clone())),
        scanner: or_fallback(&scanner.and_then(|t| t.name.clone())),
        scanner_version: or_fallback(&scanner.and_then(|t| t.version.clone())),
        status: or_fallback(&scan.status),
        findings: report.findings().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report;
    use serde_json::json;

    fn report_with(vulns: serde_json::Value) -> ScanReport {
        report::from_value(json!({"scan": {"status": "success"}, "vulnerabilities": vulns}))
            .unwrap()
    }

    #[test]
    fn test_build_page_resolves_links_per_finding() {
        let rep = report_with(json!([
            {"id": "v1", "severity": "High", "name": "SQLi",
             "location": {"file": "src/db.rs", "start_line": 4, "end_line": 9}},
            {"id": "v2", "severity": "Low", "name": "Unused",
             "location": {"file": "", "start_line": 0}}
        ]));
        let page = build_page(
            &rep,
            &FilterState::default(),
            1,
            "https://gitlab.com/g/p/-/blob/main/",
        );
        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.items[0].source_url,
            "https://gitlab.com/g/p/-/blob/main/src/db.rs#L4-9"
        );
        // Second location is unresolvable; only that link degrades
        assert_eq!(page.items[1].source_url, "");
        assert_eq!(page.items[1].index, 1);
    }

    #[test]
    fn test_missing_scalars_fall_back_to_placeholder() {
        let rep = report_with(json!([{"location": {"file": "a.go", "start_line": 1}}]));
        let page = build_page(&rep, &FilterState::default(), 1, "");
        let card = &page.items[0];
        assert_eq!(card.id, "N/A");
        assert_eq!(card.severity, "N/A");
        assert_eq!(card.name, "N/A");
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_duplicate_ids_disambiguated_by_index() {
        let rep = report_with(json!([
            {"id": "dup", "location": {"file": "a.go", "start_line": 1}},
            {"id": "dup", "location": {"file": "b.go", "start_line": 2}}
        ]));
        let page = build_page(&rep, &FilterState::default(), 1, "");
        assert_eq!(page.items[0].id, page.items[1].id);
        assert_ne!(page.items[0].index, page.items[1].index);
    }

    #[test]
    fn test_summarize_with_and_without_metadata() {
        let rep = report::from_value(json!({
            "version": "15.0.4",
            "scan": {
                "analyzer": {"name": "semgrep", "version": "1.9"},
                "scanner": {"name": "Semgrep", "version": "1.9"},
                "status": "success"
            }
        }))
        .unwrap();
        let s = summarize(&rep);
        assert_eq!(s.version, "15.0.4");
        assert_eq!(s.analyzer, "semgrep");
        assert_eq!(s.findings, 0);

        let bare = report::from_str(r#"{"scan": {}}"#).unwrap();
        let s = summarize(&bare);
        assert_eq!(s.version, "N/A");
        assert_eq!(s.analyzer, "N/A");
        assert_eq!(s.scanner_version, "N/A");
        assert_eq!(s.status, "N/A");
    }
}
