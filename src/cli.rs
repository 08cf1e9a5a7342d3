//! CLI argument parsing via `clap`.

use clap::{builder::PossibleValuesParser, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sastview",
    version,
    about = "Sastview (Rust + JSON)",
    long_about = "Sastview — a tiny, fast CLI to browse, filter, and deep-link the findings of a SAST report.\n\nConfiguration precedence: CLI > sastview.toml > defaults.",
    after_help = "Examples:\n  sastview show report.json --severity High --page 2\n  sastview show report.json --file src/ --repo https://gitlab.com/group/project/-/blob/main/\n  sastview summary report.json --output json\n  sastview repo set https://gitlab.com/group/project/-/blob/main/",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for browsing reports and managing the base URL.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current sastview version.")]
    Version,
    /// Browse the findings of a report
    #[command(
        about = "Render the filtered findings list",
        long_about = "Load a SAST report and print the findings matching the selected filters, one page at a time. Source links are resolved against the repository base URL.",
        after_help = "Examples:\n  sastview show report.json\n  sastview show report.json --severity Critical --file src/ --page 2\n  sastview show - --output json < report.json"
    )]
    Show {
        #[arg(help = "Path to the report JSON file, or - for stdin")]
        report: String,
        #[arg(
            long,
            help = "Severity filter (prefix match)",
            value_parser = PossibleValuesParser::new(["Critical", "High", "Medium", "Low"])
        )]
        severity: Option<String>,
        #[arg(long, help = "File path prefix filter, e.g. src/")]
        file: Option<String>,
        #[arg(long, help = "1-based page number (default: 1)")]
        page: Option<usize>,
        #[arg(
            long,
            help = "Repository base URL for source links (persisted on change)"
        )]
        repo: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Print report metadata
    #[command(
        about = "Print the report metadata block",
        long_about = "Print report/analyzer/scanner versions, scan status, and the finding count. Absent fields show as N/A.",
        after_help = "Examples:\n  sastview summary report.json\n  sastview summary report.json --output json"
    )]
    Summary {
        #[arg(help = "Path to the report JSON file, or - for stdin")]
        report: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Manage the persisted repository base URL
    Repo {
        #[command(subcommand)]
        cmd: RepoCmd,
    },
}

#[derive(Subcommand)]
/// Subcommands for `sastview repo`
pub enum RepoCmd {
    /// Print the stored base URL
    #[command(
        about = "Print base URL",
        long_about = "Print the repository base URL stored in sastview.toml."
    )]
    Get,
    /// Store a base URL
    #[command(
        about = "Store base URL",
        long_about = "Store the repository base URL used to resolve source links, e.g. https://gitlab.com/group/project/-/blob/main/."
    )]
    Set {
        #[arg(help = "Browsable repository URL ending at the ref, e.g. .../-/blob/main/")]
        url: String,
    },
    /// Drop the stored base URL
    #[command(
        about = "Drop base URL",
        long_about = "Remove the stored repository base URL; source links degrade to absent."
    )]
    Clear,
}
