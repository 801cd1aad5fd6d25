use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::admissions::{AdmissionsError, AdmissionsSource};
use crate::ranking::{project, NationalId, RankingError};
use crate::report::ProjectionReport;

/// Service composing an admissions source with the rank projector.
pub struct RankLookupService<S: ?Sized> {
    source: Arc<S>,
}

impl<S> RankLookupService<S>
where
    S: AdmissionsSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch the competition list for `program_id` and project `national_id` within it.
    pub fn lookup(
        &self,
        program_id: u32,
        national_id: &NationalId,
    ) -> Result<ProjectionReport, LookupError> {
        let snapshot = self.source.fetch(program_id)?;
        debug!(
            program_id,
            source = %self.source.describe(),
            applicants = snapshot.applicants.len(),
            "competition list loaded"
        );

        let occurrences = snapshot.applicants.occurrences_of(national_id);
        if occurrences > 1 {
            warn!(
                %national_id,
                occurrences, "national id listed more than once, using the lowest entry"
            );
        }

        let projection = project(&snapshot.applicants, national_id)?;
        info!(
            program_id,
            raw_place = projection.raw_place,
            projected_place = projection.projected_place.any,
            recommended_place = projection.recommended_place.any,
            "rank projection computed"
        );

        Ok(ProjectionReport::new(&snapshot.program, &projection))
    }
}

/// Error raised by the lookup service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Source(#[from] AdmissionsError),
    #[error(transparent)]
    Ranking(#[from] RankingError),
}
