//! Finding filtering and pagination.
//!
//! Pure pass over the unfiltered finding list: assigns each finding its
//! display-only sequence index (position in input order), retains the ones
//! matching the current filter prefixes, and slices the retained set into
//! fixed-size pages. Matching is case-sensitive exact-prefix, not substring
//! and not fuzzy.
//!
//! The paginator does not clamp out-of-range pages; callers start a fresh
//! pass at page 1 whenever the filtered count changes.

use crate::models::report::Finding;
use crate::models::PageInfo;

/// Fixed page size for the findings list.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Default, Clone)]
/// Current filter selections. Empty prefix means no filter.
pub struct FilterState {
    /// Severity label prefix, e.g. "High".
    pub severity: String,
    /// File path prefix, e.g. "src/".
    pub file: String,
}

impl FilterState {
    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.severity.is_empty() && self.file.is_empty()
    }

    /// Prefix match on both the file path and the severity label. A finding
    /// without a severity only matches the empty severity prefix.
    pub fn matches(&self, finding: &Finding) -> bool {
        finding.location.file.starts_with(&self.file)
            && finding
                .severity
                .as_deref()
                .unwrap_or("")
                .starts_with(&self.severity)
    }
}

/// A finding paired with its display-only sequence index.
pub struct IndexedFinding {
    pub index: usize,
    pub finding: Finding,
}

/// Output of one filter/paginate pass.
pub struct SelectedPage {
    pub visible: Vec<IndexedFinding>,
    pub pager: PageInfo,
}

/// Total page count for a filtered count: `max(1, ceil(count / PAGE_SIZE))`.
pub fn pages_for(count: usize) -> usize {
    std::cmp::max(1, (count + PAGE_SIZE - 1) / PAGE_SIZE)
}

/// Filter `findings` and slice out the requested 1-based page.
///
/// Sequence indices are assigned over the unfiltered input, so they stay
/// stable across filter and page changes for one report version and only
/// change when the report itself is replaced.
pub fn select_page(findings: &[Finding], filter: &FilterState, page: usize) -> SelectedPage {
    let retained: Vec<IndexedFinding> = findings
        .iter()
        .enumerate()
        .filter(|(_, f)| filter.matches(f))
        .map(|(index, f)| IndexedFinding {
            index,
            finding: f.clone(),
        })
        .collect();

    let count = retained.len();
    let pages = pages_for(count);
    let start = PAGE_SIZE * page.saturating_sub(1);
    let visible: Vec<IndexedFinding> = retained
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    SelectedPage {
        visible,
        pager: PageInfo {
            page,
            pages,
            count,
            page_size: PAGE_SIZE,
            paged: count > PAGE_SIZE,
        },
    }
}
