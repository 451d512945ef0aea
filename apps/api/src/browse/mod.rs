// Candidate browsing: assemble candidates for a job, classify, sort, filter.
// The assembler is the only component here that performs I/O.

pub mod assembler;
pub mod handlers;
pub mod ordering;

use serde::Serialize;

use crate::matching::fit::FitClassification;
use crate::models::candidate::Candidate;

/// A candidate with its per-request fit classification attached.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub fit: FitClassification,
}
