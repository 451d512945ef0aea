//! Sort and filter engine for assembled candidate lists.
//!
//! Sorting is one stable composite comparator: the active tokens are
//! evaluated in the order they were selected and the first non-zero
//! comparison wins, so selection order defines tie-break priority. Filters
//! are equality predicates combined with AND, applied after sorting.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::browse::RankedCandidate;
use crate::models::candidate::CandidateStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCategory {
    Fit,
    Applied,
    Submitted,
}

/// One sort criterion. The string form is `<category>-<direction>`; the
/// prefix identifies the category for replacement on re-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortToken {
    FitDesc,
    FitAsc,
    AppliedDesc,
    AppliedAsc,
    SubmittedDesc,
    SubmittedAsc,
}

impl SortToken {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "fit-desc" => Some(Self::FitDesc),
            "fit-asc" => Some(Self::FitAsc),
            "applied-desc" => Some(Self::AppliedDesc),
            "applied-asc" => Some(Self::AppliedAsc),
            "submitted-desc" => Some(Self::SubmittedDesc),
            "submitted-asc" => Some(Self::SubmittedAsc),
            _ => None,
        }
    }

    pub fn category(self) -> SortCategory {
        match self {
            Self::FitDesc | Self::FitAsc => SortCategory::Fit,
            Self::AppliedDesc | Self::AppliedAsc => SortCategory::Applied,
            Self::SubmittedDesc | Self::SubmittedAsc => SortCategory::Submitted,
        }
    }

    fn compare(self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
        match self {
            Self::FitDesc => b
                .candidate
                .stats
                .overall_score
                .total_cmp(&a.candidate.stats.overall_score),
            Self::FitAsc => a
                .candidate
                .stats
                .overall_score
                .total_cmp(&b.candidate.stats.overall_score),
            Self::AppliedDesc => b.candidate.applied_at.cmp(&a.candidate.applied_at),
            Self::AppliedAsc => a.candidate.applied_at.cmp(&b.candidate.applied_at),
            Self::SubmittedDesc => submitted_order(
                a.candidate.assignment.submitted_at,
                b.candidate.assignment.submitted_at,
                true,
            ),
            Self::SubmittedAsc => submitted_order(
                a.candidate.assignment.submitted_at,
                b.candidate.assignment.submitted_at,
                false,
            ),
        }
    }
}

/// Unsubmitted assignments order last regardless of the requested direction.
fn submitted_order(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    newest_first: bool,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            if newest_first {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
    }
}

/// Ordered sort selection. At most one token per category; re-selecting a
/// category replaces its token and moves it to the lowest priority.
#[derive(Debug, Clone, Default)]
pub struct SortSelection {
    tokens: Vec<SortToken>,
}

impl SortSelection {
    /// Parses a comma-separated token list, applying the replacement
    /// contract in encounter order. Unknown tokens are ignored.
    pub fn from_param(param: &str) -> Self {
        let mut selection = Self::default();
        for raw in param.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if let Some(token) = SortToken::parse(raw) {
                selection.select(token);
            }
        }
        selection
    }

    pub fn select(&mut self, token: SortToken) {
        self.tokens.retain(|t| t.category() != token.category());
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[SortToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Stable sort by the composite comparator. No active tokens means the
/// assembled order is kept as-is.
pub fn sort_candidates(candidates: &mut [RankedCandidate], selection: &SortSelection) {
    if selection.is_empty() {
        return;
    }
    candidates.sort_by(|a, b| {
        for token in selection.tokens() {
            let ordering = token.compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// Active tag filters. Selecting an already-active tag clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub fit: Option<String>,
    pub status: Option<CandidateStatus>,
}

impl FilterSelection {
    pub fn toggle_fit(&mut self, tag: &str) {
        if self.fit.as_deref() == Some(tag) {
            self.fit = None;
        } else {
            self.fit = Some(tag.to_string());
        }
    }

    pub fn toggle_status(&mut self, status: CandidateStatus) {
        if self.status == Some(status) {
            self.status = None;
        } else {
            self.status = Some(status);
        }
    }

    pub fn matches(&self, candidate: &RankedCandidate) -> bool {
        let fit_ok = self
            .fit
            .as_deref()
            .map_or(true, |tag| candidate.fit.tag == tag);
        let status_ok = self
            .status
            .map_or(true, |status| candidate.candidate.status == status);
        fit_ok && status_ok
    }
}

pub fn filter_candidates(
    candidates: Vec<RankedCandidate>,
    filters: &FilterSelection,
) -> Vec<RankedCandidate> {
    candidates
        .into_iter()
        .filter(|c| filters.matches(c))
        .collect()
}
