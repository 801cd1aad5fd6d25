//! Rank projections for a single applicant within a published competition list.
//!
//! Every projection is a forward scan over the list in its published order; nothing
//! here reorders, mutates, or retains the input.

pub mod domain;
mod projection;
pub mod rules;

#[cfg(test)]
mod tests;

pub use domain::{ApplicantRecord, NationalId, ProgramMetadata, RankedList};
pub use projection::project;

use serde::Serialize;

/// Place among applicants who declared this program as priority 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityPlace {
    pub any: usize,
    pub with_originals: usize,
}

/// Place once applicants still waiting on exam results are projected ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedPlace {
    pub any: usize,
    pub priority_one: usize,
    pub priority_one_with_originals: usize,
}

/// Place within the subsequence of applicants recommended for admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedPlace {
    pub any: usize,
    pub with_originals: usize,
}

/// The located applicant together with every rank metric derived for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankProjection {
    pub target_index: usize,
    pub target: ApplicantRecord,
    pub raw_place: usize,
    pub priority_place: PriorityPlace,
    pub projected_place: ProjectedPlace,
    pub recommended_place: RecommendedPlace,
}

/// Error raised when a projection cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("national id {national_id} not found in the competition list")]
    NotFound { national_id: NationalId },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
