use super::{decode_payload, AdmissionsError, AdmissionsSnapshot, AdmissionsSource};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a previously saved rating payload from disk.
#[derive(Debug, Clone)]
pub struct FileAdmissionsSource {
    path: PathBuf,
}

impl FileAdmissionsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AdmissionsSource for FileAdmissionsSource {
    fn fetch(&self, program_id: u32) -> Result<AdmissionsSnapshot, AdmissionsError> {
        info!(program_id, path = %self.path.display(), "loading saved competition list");
        let body = std::fs::read(&self.path)?;
        decode_payload(program_id, &body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
