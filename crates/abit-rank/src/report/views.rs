use crate::ranking::{
    PriorityPlace, ProgramMetadata, ProjectedPlace, RankProjection, RecommendedPlace,
};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramView {
    pub program_id: u32,
    pub direction: String,
    pub budget_places: i64,
    pub target_quota: i64,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetView {
    pub national_id: String,
    pub total_score: f64,
    pub diploma_average: f64,
    pub originals_submitted: bool,
    pub current_place: usize,
}

/// Everything shown to the applicant for one lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub program: ProgramView,
    pub target: TargetView,
    pub priority_place: PriorityPlace,
    pub projected_place: ProjectedPlace,
    pub recommended_place: RecommendedPlace,
}

impl ProjectionReport {
    pub fn new(program: &ProgramMetadata, projection: &RankProjection) -> Self {
        Self {
            program: ProgramView {
                program_id: program.program_id,
                direction: program.direction.clone(),
                budget_places: program.budget_places,
                target_quota: program.target_quota,
                updated_at: program.updated_at,
            },
            target: TargetView {
                national_id: projection.target.national_id.clone(),
                total_score: projection.target.total_score,
                diploma_average: projection.target.diploma_average,
                originals_submitted: projection.target.originals_submitted,
                current_place: projection.raw_place,
            },
            priority_place: projection.priority_place,
            projected_place: projection.projected_place,
            recommended_place: projection.recommended_place,
        }
    }
}
