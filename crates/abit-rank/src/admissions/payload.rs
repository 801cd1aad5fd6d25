use super::{AdmissionsError, AdmissionsSnapshot};
use crate::ranking::domain::null_as_default;
use crate::ranking::{ApplicantRecord, ProgramMetadata, RankedList};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RatingPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    ok: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    #[serde(default)]
    result: Option<RatingResult>,
}

#[derive(Debug, Deserialize)]
struct RatingResult {
    #[serde(default, deserialize_with = "null_as_default")]
    direction: Direction,
    #[serde(
        rename = "general_competition",
        default,
        deserialize_with = "null_as_default"
    )]
    applicants: Vec<ApplicantRecord>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    update_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Direction {
    #[serde(default, deserialize_with = "null_as_default")]
    direction_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    budget_min: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    target_reception: i64,
}

/// Decode a rating API response body into a snapshot.
pub fn decode_payload(program_id: u32, body: &[u8]) -> Result<AdmissionsSnapshot, AdmissionsError> {
    let payload: RatingPayload = serde_json::from_slice(body)?;

    if !payload.ok {
        return Err(AdmissionsError::Rejected {
            program_id,
            message: payload.message,
        });
    }

    let result = payload
        .result
        .ok_or(AdmissionsError::MissingResult { program_id })?;

    let updated_at = result.update_time.as_deref().and_then(|raw| {
        let parsed = parse_timestamp(raw);
        if parsed.is_none() {
            warn!(update_time = raw, "unrecognised rating timestamp");
        }
        parsed
    });

    Ok(AdmissionsSnapshot {
        program: ProgramMetadata {
            program_id,
            direction: result.direction.direction_title,
            budget_places: result.direction.budget_min,
            target_quota: result.direction.target_reception,
            updated_at,
        },
        applicants: RankedList::new(result.applicants),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 7, 27)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .expect("valid timestamp")
    }

    #[test]
    fn parses_rfc3339_keeping_published_wall_clock() {
        assert_eq!(
            parse_timestamp("2023-07-27T12:30:00+03:00"),
            Some(at(12, 30, 0))
        );
    }

    #[test]
    fn parses_naive_timestamps() {
        assert_eq!(
            parse_timestamp("2023-07-27T08:15:42.123456"),
            NaiveDate::from_ymd_opt(2023, 7, 27)
                .and_then(|date| date.and_hms_micro_opt(8, 15, 42, 123_456))
        );
        assert_eq!(parse_timestamp("2023-07-27 08:15:42"), Some(at(8, 15, 42)));
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn null_fields_decode_to_zero_values() {
        let body = br#"{
            "ok": true,
            "message": null,
            "result": {
                "direction": { "direction_title": "Data Science", "budget_min": null },
                "general_competition": [
                    { "snils": "111", "priority": null, "total_scores": null,
                      "diploma_average": 4.5, "is_send_original": null, "status": null }
                ],
                "update_time": ""
            }
        }"#;

        let snapshot = decode_payload(7431, body).expect("payload decodes");

        assert_eq!(snapshot.program.direction, "Data Science");
        assert_eq!(snapshot.program.budget_places, 0);
        assert_eq!(snapshot.program.updated_at, None);
        let record = &snapshot.applicants.records()[0];
        assert_eq!(record.priority, 0);
        assert_eq!(record.total_score, 0.0);
        assert!(!record.originals_submitted);
        assert_eq!(record.status, "");
    }

    #[test]
    fn rejected_payload_reports_api_message() {
        let body = br#"{ "ok": false, "message": "program not found", "result": null }"#;

        match decode_payload(1, body) {
            Err(AdmissionsError::Rejected {
                program_id,
                message,
            }) => {
                assert_eq!(program_id, 1);
                assert_eq!(message, "program not found");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn ok_payload_without_result_is_an_error() {
        let body = br#"{ "ok": true }"#;

        assert!(matches!(
            decode_payload(5, body),
            Err(AdmissionsError::MissingResult { program_id: 5 })
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            decode_payload(5, b"<html>bad gateway</html>"),
            Err(AdmissionsError::Decode(_))
        ));
    }
}
