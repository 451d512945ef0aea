use std::sync::Arc;

use crate::ats::AtsBackend;
use crate::config::Config;
use crate::directory::PhoneDirectory;
use crate::matching::fit::{
    AggregateScorePolicy, FitPolicy, PercentageMatchPolicy, PolicyChoice,
};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The upstream hiring backend. Behind a trait so tests can swap in an
    /// in-memory implementation.
    pub backend: Arc<dyn AtsBackend>,
    pub directory: PhoneDirectory,
    #[allow(dead_code)]
    pub config: Config,
    /// Both fit classification policies; requests pick one via `?policy=`.
    pub policies: FitPolicySet,
}

#[derive(Clone)]
pub struct FitPolicySet {
    aggregate: Arc<dyn FitPolicy>,
    percentage: Arc<dyn FitPolicy>,
}

impl FitPolicySet {
    pub fn new() -> Self {
        Self {
            aggregate: Arc::new(AggregateScorePolicy),
            percentage: Arc::new(PercentageMatchPolicy),
        }
    }

    pub fn select(&self, choice: PolicyChoice) -> &dyn FitPolicy {
        match choice {
            PolicyChoice::Aggregate => self.aggregate.as_ref(),
            PolicyChoice::Percentage => self.percentage.as_ref(),
        }
    }
}

impl Default for FitPolicySet {
    fn default() -> Self {
        Self::new()
    }
}
