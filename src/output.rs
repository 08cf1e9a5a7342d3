//! Output rendering for the findings list and summary commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and the pagination metadata.

use crate::filter::FilterState;
use crate::models::{FindingCard, FindingsPage, ReportSummary};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_badge(severity: &str, color: bool) -> String {
    let label = format!("⟦{}⟧", severity);
    if !color {
        return label;
    }
    match severity {
        "Critical" => label.red().bold().to_string(),
        "High" => label.red().to_string(),
        "Medium" => label.yellow().to_string(),
        "Low" => label.blue().to_string(),
        _ => label.bright_black().to_string(),
    }
}

fn severity_icon(severity: &str) -> String {
    match severity {
        "Critical" | "High" => "✖".red().to_string(),
        "Medium" => "▲".yellow().to_string(),
        "Low" => "◆".blue().to_string(),
        _ => "◇".to_string(),
    }
}

/// Line-range suffix used in the source line, `:10` or `:10-15`. The end is
/// appended whenever present and non-zero, matching the link fragment.
fn line_span(card: &FindingCard) -> String {
    match card.end_line {
        Some(end) if end != 0 => format!("{}-{}", card.start_line, end),
        _ => card.start_line.to_string(),
    }
}

/// Print the visible findings page in the requested format.
pub fn print_findings(page: &FindingsPage, filter: &FilterState, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_findings_json(page)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if page.pager.count == 0 {
                let msg = if filter.is_empty() {
                    "Report contains no findings."
                } else {
                    "No findings match the current filters."
                };
                if color {
                    println!("{}", msg.bright_black());
                } else {
                    println!("{}", msg);
                }
                return;
            }
            if page.items.is_empty() {
                println!("No findings on this page.");
            }
            for card in &page.items {
                print_card(card, color);
            }
            let summary = format!(
                "— Findings — showing {} of {}",
                page.items.len(),
                page.pager.count
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            // Pagination only appears when the results exceed one page
            if page.pager.paged {
                println!(
                    "page {} of {} ({} per page)",
                    page.pager.page, page.pager.pages, page.pager.page_size
                );
            }
        }
    }
}

fn print_card(card: &FindingCard, color: bool) {
    let badge = severity_badge(&card.severity, color);
    let name = if color {
        card.name.clone().bold().to_string()
    } else {
        card.name.clone()
    };
    println!(
        "{} {} {} ❲{}❳ (#{})",
        severity_icon(&card.severity),
        badge,
        name,
        card.category,
        card.index
    );
    if !card.description.is_empty() {
        // Raw Markdown passthrough; rendering is the consumer's concern
        for line in card.description.lines() {
            println!("    {}", line);
        }
    }
    if !card.identifiers.is_empty() {
        let list = card
            .identifiers
            .iter()
            .map(|i| match &i.url {
                Some(url) => format!("{} <{}>", i.name, url),
                None => i.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("    Identifiers: {}", list);
    }
    let span = line_span(card);
    if card.source_url.is_empty() {
        println!("    Source: {}:{}", card.file, span);
    } else {
        println!(
            "    Source: Open {}:{} → {}",
            card.file, span, card.source_url
        );
    }
}

/// Print the report metadata block in the requested format.
pub fn print_summary(summary: &ReportSummary, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_summary_json(summary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let versions = format!(
                "Versions: Report {} / Analyzer {} {} / Scanner {} {}",
                summary.version,
                summary.analyzer,
                summary.analyzer_version,
                summary.scanner,
                summary.scanner_version
            );
            if color {
                println!("{}", versions.bright_black());
            } else {
                println!("{}", versions);
            }
            println!("Status: {}", summary.status);
            println!("Findings: {}", summary.findings);
        }
    }
}

/// Compose findings JSON object (pure) for testing/snapshot purposes.
pub fn compose_findings_json(page: &FindingsPage) -> JsonVal {
    // Directly serialize FindingsPage as JSON, keeping stable shape
    serde_json::to_value(page).unwrap()
}

/// Compose summary JSON object (pure) for testing/snapshot purposes.
pub fn compose_summary_json(summary: &ReportSummary) -> JsonVal {
    serde_json::to_value(summary).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdentifierRef, PageInfo};

    fn page() -> FindingsPage {
        FindingsPage {
            items: vec![FindingCard {
                index: 0,
                id: "v1".into(),
                severity: "High".into(),
                category: "sast".into(),
                name: "Hardcoded secret".into(),
                description: "Do **not** commit secrets.".into(),
                file: "src/main.rs".into(),
                start_line: 10,
                end_line: Some(15),
                identifiers: vec![IdentifierRef {
                    name: "CWE-798".into(),
                    url: Some("https://cwe.mitre.org/data/definitions/798.html".into()),
                }],
                source_url: "https://gitlab.com/g/p/-/blob/main/src/main.rs#L10-15".into(),
            }],
            pager: PageInfo {
                page: 1,
                pages: 1,
                count: 1,
                page_size: 20,
                paged: false,
            },
        }
    }

    #[test]
    fn test_compose_findings_json_shape() {
        let out = compose_findings_json(&page());
        assert_eq!(out["pager"]["count"], 1);
        assert_eq!(out["pager"]["pages"], 1);
        assert_eq!(out["pager"]["paged"], false);
        assert_eq!(out["items"][0]["severity"], "High");
        assert_eq!(out["items"][0]["index"], 0);
        assert_eq!(out["items"][0]["end_line"], 15);
        // Markdown stays raw in the JSON form
        assert_eq!(out["items"][0]["description"], "Do **not** commit secrets.");
        assert_eq!(out["items"][0]["identifiers"][0]["name"], "CWE-798");
    }

    #[test]
    fn test_compose_summary_json_shape() {
        let s = ReportSummary {
            version: "15.0.4".into(),
            analyzer: "semgrep".into(),
            analyzer_version: "1.9".into(),
            scanner: "Semgrep".into(),
            scanner_version: "1.9".into(),
            status: "success".into(),
            findings: 12,
        };
        let out = compose_summary_json(&s);
        assert_eq!(out["version"], "15.0.4");
        assert_eq!(out["findings"], 12);
        assert_eq!(out["status"], "success");
    }

    #[test]
    fn test_severity_badge_plain_without_color() {
        assert_eq!(severity_badge("Critical", false), "⟦Critical⟧");
        assert_eq!(severity_badge("Unknown", false), "⟦Unknown⟧");
    }

    #[test]
    fn test_line_span_uses_truthy_end() {
        let mut card = page().items.remove(0);
        assert_eq!(line_span(&card), "10-15");
        card.end_line = Some(0);
        assert_eq!(line_span(&card), "10");
        card.end_line = None;
        assert_eq!(line_span(&card), "10");
        card.end_line = Some(10);
        card.start_line = 10;
        assert_eq!(line_span(&card), "10-10");
    }
}
