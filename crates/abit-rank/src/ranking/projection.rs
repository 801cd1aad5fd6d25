use super::domain::{ApplicantRecord, NationalId, RankedList};
use super::rules::{
    is_priority_one, is_priority_one_with_originals, is_recommended, projected_ahead,
};
use super::{PriorityPlace, ProjectedPlace, RankProjection, RankingError, RecommendedPlace};

/// Locate `national_id` in `list` and compute its rank metrics.
pub fn project(list: &RankedList, national_id: &NationalId) -> Result<RankProjection, RankingError> {
    if list.is_empty() {
        return Err(RankingError::InvalidInput(
            "competition list is empty".to_string(),
        ));
    }
    if national_id.is_blank() {
        return Err(RankingError::InvalidInput(
            "national id is blank".to_string(),
        ));
    }

    let target_index = list
        .position_of(national_id)
        .ok_or_else(|| RankingError::NotFound {
            national_id: national_id.clone(),
        })?;

    let records = list.records();
    let target = &records[target_index];
    let ahead = &records[..target_index];
    let behind = &records[target_index + 1..];

    Ok(RankProjection {
        target_index,
        target: target.clone(),
        raw_place: target_index + 1,
        priority_place: priority_place(ahead),
        projected_place: projected_place(target_index, target, behind),
        recommended_place: recommended_place(ahead),
    })
}

fn priority_place(ahead: &[ApplicantRecord]) -> PriorityPlace {
    let any = ahead.iter().filter(|record| is_priority_one(record)).count();
    let with_originals = ahead
        .iter()
        .filter(|record| is_priority_one_with_originals(record))
        .count();

    PriorityPlace {
        any: any + 1,
        with_originals: with_originals + 1,
    }
}

fn projected_place(
    target_index: usize,
    target: &ApplicantRecord,
    behind: &[ApplicantRecord],
) -> ProjectedPlace {
    let mut any = 0;
    let mut priority_one = 0;
    let mut priority_one_with_originals = 0;

    for record in behind.iter().filter(|record| projected_ahead(record, target)) {
        any += 1;
        if is_priority_one(record) {
            priority_one += 1;
            if record.originals_submitted {
                priority_one_with_originals += 1;
            }
        }
    }

    let place = target_index + 1;
    ProjectedPlace {
        any: place + any,
        priority_one: place + priority_one,
        priority_one_with_originals: place + priority_one_with_originals,
    }
}

// The target is counted in both tallies whatever its own status.
fn recommended_place(ahead: &[ApplicantRecord]) -> RecommendedPlace {
    let recommended = ahead.iter().filter(|record| is_recommended(record));
    let (any, with_originals) = recommended.fold((0, 0), |(any, with_originals), record| {
        (any + 1, with_originals + usize::from(record.originals_submitted))
    });

    RecommendedPlace {
        any: any + 1,
        with_originals: with_originals + 1,
    }
}
