//! Admissions office data sources feeding the rank projector.

mod file;
mod http;
mod payload;

pub use file::FileAdmissionsSource;
pub use http::HttpAdmissionsSource;
pub use payload::decode_payload;

use crate::ranking::{ProgramMetadata, RankedList};

/// Program metadata plus the competition list as published at fetch time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdmissionsSnapshot {
    pub program: ProgramMetadata,
    pub applicants: RankedList,
}

/// Anything able to supply a competition list for a program.
pub trait AdmissionsSource: Send + Sync {
    fn fetch(&self, program_id: u32) -> Result<AdmissionsSnapshot, AdmissionsError>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Error enumeration for admissions source failures.
#[derive(Debug, thiserror::Error)]
pub enum AdmissionsError {
    #[error("request to admissions API failed: {0}")]
    Transport(String),
    #[error("admissions API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to read admissions payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("admissions payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("admissions API rejected program {program_id} (check the program id): {message}")]
    Rejected { program_id: u32, message: String },
    #[error("admissions API returned no result for program {program_id}")]
    MissingResult { program_id: u32 },
}
