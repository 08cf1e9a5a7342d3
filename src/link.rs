//! Deep-link resolution for finding locations.
//!
//! Builds an absolute URL pointing at the line range of a finding inside a
//! browsable repository view. The base reference is free-form user input;
//! any failure resolves to an empty string so a single bad link never takes
//! down the surrounding list.

use crate::models::report::Location;
use url::Url;

/// Rewrite a directory-tree view base to the file view and make sure it
/// ends with `/`, so relative resolution appends instead of replacing the
/// last path segment.
pub fn normalize_repo_base(repo: &str) -> String {
    let mut base = repo.replacen("/-/tree/", "/-/blob/", 1);
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

/// Resolve `location.file` against the repository base and append the line
/// range fragment: `#L<start>` alone, or `#L<start>-<end>` whenever
/// `end_line` is present and non-zero, even when it equals `start_line`.
///
/// Returns `""` for an empty or unparseable base, an empty file path, or a
/// failed relative resolution.
pub fn resolve_source_url(repo: &str, location: &Location) -> String {
    if repo.is_empty() || location.file.is_empty() {
        return String::new();
    }
    let base = match Url::parse(&normalize_repo_base(repo)) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let mut resolved = match base.join(&location.file) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let fragment = match location.end_line {
        Some(end) if end != 0 => format!("L{}-{}", location.start_line, end),
        _ => format!("L{}", location.start_line),
    };
    resolved.set_fragment(Some(&fragment));
    resolved.to_string()
}
