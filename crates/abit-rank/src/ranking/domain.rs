use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for an applicant's SNILS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(pub String);

impl NationalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public ranking attributes of one candidate in the competition list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub diploma_average: f64,
    #[serde(
        rename = "total_scores",
        default,
        deserialize_with = "null_as_default"
    )]
    pub total_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i32,
    #[serde(
        rename = "is_send_original",
        default,
        deserialize_with = "null_as_default"
    )]
    pub originals_submitted: bool,
    #[serde(rename = "snils", default, deserialize_with = "null_as_default")]
    pub national_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl ApplicantRecord {
    pub fn matches(&self, national_id: &NationalId) -> bool {
        self.national_id == national_id.0
    }
}

/// Competition list in the order published by the admissions office.
///
/// Index 0 is the strongest applicant. The list is never re-sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList(Vec<ApplicantRecord>);

impl RankedList {
    pub fn new(records: Vec<ApplicantRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[ApplicantRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of the applicant with the given id. The last match wins when
    /// the list carries duplicates.
    pub fn position_of(&self, national_id: &NationalId) -> Option<usize> {
        self.0.iter().rposition(|record| record.matches(national_id))
    }

    pub fn occurrences_of(&self, national_id: &NationalId) -> usize {
        self.0
            .iter()
            .filter(|record| record.matches(national_id))
            .count()
    }
}

impl From<Vec<ApplicantRecord>> for RankedList {
    fn from(records: Vec<ApplicantRecord>) -> Self {
        Self::new(records)
    }
}

/// Descriptive program data shown alongside the projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProgramMetadata {
    pub program_id: u32,
    pub direction: String,
    pub budget_places: i64,
    pub target_quota: i64,
    pub updated_at: Option<NaiveDateTime>,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
