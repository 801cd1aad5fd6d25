use crate::ranking::domain::{ApplicantRecord, NationalId, RankedList};

pub(super) fn applicant(
    national_id: &str,
    priority: i32,
    score: f64,
    average: f64,
    originals: bool,
    status: &str,
) -> ApplicantRecord {
    ApplicantRecord {
        diploma_average: average,
        total_score: score,
        priority,
        originals_submitted: originals,
        national_id: national_id.to_string(),
        status: status.to_string(),
    }
}

pub(super) fn id(value: &str) -> NationalId {
    NationalId::new(value)
}

/// The three-applicant list used throughout the projection docs.
pub(super) fn sample_list() -> RankedList {
    RankedList::new(vec![
        applicant("A", 1, 50.0, 4.0, true, "recommended"),
        applicant("B", 2, 0.0, 4.5, false, ""),
        applicant("C", 1, 0.0, 3.0, true, ""),
    ])
}

/// A longer list with a target in the middle and a mix of pending exams behind it.
pub(super) fn cohort() -> RankedList {
    RankedList::new(vec![
        applicant("101-001", 1, 98.0, 4.9, true, "recommended"),
        applicant("101-002", 3, 95.0, 4.7, false, "recommended"),
        applicant("101-003", 0, 91.0, 4.1, false, ""),
        applicant("101-004", 1, 90.0, 4.6, false, "recommended"),
        applicant("101-005", 2, 88.0, 4.3, true, "recommended"),
        applicant("TARGET", 1, 85.0, 4.4, true, ""),
        applicant("101-007", 1, 84.0, 4.8, true, ""),
        applicant("101-008", 1, 0.0, 4.5, true, ""),
        applicant("101-009", 2, 0.0, 4.9, true, ""),
        applicant("101-010", 1, 0.0, 4.0, false, ""),
        applicant("101-011", 1, 7.0, 3.2, false, ""),
        applicant("101-012", 1, 0.0, 4.6, false, ""),
    ])
}
