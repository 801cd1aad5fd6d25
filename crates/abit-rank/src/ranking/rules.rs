use super::domain::ApplicantRecord;

/// Scores below this value mean the entrance exam has not been completed or graded.
pub const EXAM_PENDING_THRESHOLD: f64 = 10.0;

/// Score recorded for applicants with no exam result at all.
pub const NO_SCORE: f64 = 0.0;

/// Strongest declared preference. Lower values (undeclared) count as priority 1.
pub const PRIORITY_ONE: i32 = 1;

/// Status carried by applicants conditionally selected for admission.
pub const RECOMMENDED_STATUS: &str = "recommended";

pub(crate) fn is_priority_one(record: &ApplicantRecord) -> bool {
    record.priority <= PRIORITY_ONE
}

pub(crate) fn is_priority_one_with_originals(record: &ApplicantRecord) -> bool {
    is_priority_one(record) && record.originals_submitted
}

pub(crate) fn exam_pending(record: &ApplicantRecord) -> bool {
    record.total_score < EXAM_PENDING_THRESHOLD
}

pub(crate) fn has_recorded_score(record: &ApplicantRecord) -> bool {
    record.total_score != NO_SCORE
}

/// An applicant listed below the target who is still expected to overtake them
/// once their exam result arrives.
pub(crate) fn projected_ahead(record: &ApplicantRecord, target: &ApplicantRecord) -> bool {
    exam_pending(record)
        && (record.diploma_average > target.diploma_average || has_recorded_score(record))
}

pub(crate) fn is_recommended(record: &ApplicantRecord) -> bool {
    record.status == RECOMMENDED_STATUS
}
