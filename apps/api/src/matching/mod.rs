// Candidate fit derivation: skill matching, score aggregation, classification.
// Pure functions only — all backend I/O stays in the ats client.

pub mod fit;
pub mod scoring;
pub mod skills;
