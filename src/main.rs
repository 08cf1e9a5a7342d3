//! Sastview CLI binary entry point.
//! Delegates to library modules for loading, filtering, and printing.

use clap::Parser;
use sastview::cli::{Cli, Commands, RepoCmd};
use sastview::filter::FilterState;
use sastview::models::report::{self, ScanReport};
use sastview::{config, output, utils, view};
use std::io::Read;
use std::path::Path;

/// Raw inputs above this size get a stderr note instead of silence.
const LARGE_REPORT_BYTES: usize = 200_000;

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Read and adapt a report. Unreadable input is a usage error (exit 2), a
/// document that is not a report is a data error (exit 1).
fn load_report(path: &str, output_mode: &str) -> ScanReport {
    let raw = match read_input(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("Cannot read report {}: {}", path, e)
            );
            std::process::exit(2);
        }
    };
    if raw.len() > LARGE_REPORT_BYTES && output_mode != "json" {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            format!("Large report loaded ({} KB)", raw.len() / 1024)
        );
    }
    match report::from_str(&raw) {
        Some(rep) => rep,
        None => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                "Invalid report format. Please check your input."
            );
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Show {
            report,
            severity,
            file,
            page,
            repo,
            output,
        } => {
            let eff = config::resolve_effective(Path::new("."), repo.as_deref());
            // Save-on-change for the base reference, before rendering
            if let Some(r) = repo.as_deref() {
                if let Err(e) = config::persist_repo(&eff.root, r) {
                    eprintln!(
                        "{} {}",
                        utils::note_prefix(),
                        format!("Could not persist repo URL: {}", e)
                    );
                }
            }
            let out = output.unwrap_or_else(|| "human".to_string());
            let rep = load_report(&report, &out);
            let filter = FilterState {
                severity: severity.unwrap_or_default(),
                file: file.unwrap_or_default(),
            };
            let page_no = page.unwrap_or(1).max(1);
            let page = view::build_page(&rep, &filter, page_no, &eff.repo);
            output::print_findings(&page, &filter, &out);
        }
        Commands::Summary { report, output } => {
            let out = output.unwrap_or_else(|| "human".to_string());
            let rep = load_report(&report, &out);
            output::print_summary(&view::summarize(&rep), &out);
        }
        Commands::Repo { cmd } => {
            let eff = config::resolve_effective(Path::new("."), None);
            match cmd {
                RepoCmd::Get => match config::load_config(&eff.root).and_then(|c| c.repo) {
                    Some(repo) => println!("{}", repo),
                    None => {
                        eprintln!(
                            "{} {}",
                            utils::note_prefix(),
                            "No repository base URL stored."
                        );
                        std::process::exit(1);
                    }
                },
                RepoCmd::Set { url } => match config::persist_repo(&eff.root, &url) {
                    Ok(Some(path)) => println!("stored: {}", path.to_string_lossy()),
                    Ok(None) => println!("unchanged"),
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("store failed: {}", e)
                        );
                        std::process::exit(2);
                    }
                },
                RepoCmd::Clear => match config::clear_repo(&eff.root) {
                    Ok(_) => println!("cleared"),
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("clear failed: {}", e)
                        );
                        std::process::exit(2);
                    }
                },
            }
        }
    }
}
