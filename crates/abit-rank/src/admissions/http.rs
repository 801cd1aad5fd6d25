use super::{decode_payload, AdmissionsError, AdmissionsSnapshot, AdmissionsSource};
use crate::config::SourceConfig;
use std::time::Duration;
use tracing::{debug, info};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Sync HTTP client for the public rating endpoint.
pub struct HttpAdmissionsSource {
    api_url: String,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

impl HttpAdmissionsSource {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_url: api_url.into(),
            agent: make_agent(timeout),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.api_url.clone(), config.timeout)
    }

    pub fn request_url(&self, program_id: u32) -> String {
        format!(
            "{}?program_id={program_id}",
            self.api_url.trim_end_matches(['?', '/'])
        )
    }
}

impl AdmissionsSource for HttpAdmissionsSource {
    fn fetch(&self, program_id: u32) -> Result<AdmissionsSnapshot, AdmissionsError> {
        let url = self.request_url(program_id);
        info!(program_id, %url, "requesting competition list");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(|err| AdmissionsError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|err| AdmissionsError::Transport(err.to_string()))?;
        debug!(status, bytes = body.len(), "rating response received");

        interpret_response(program_id, status, &body)
    }

    fn describe(&self) -> String {
        self.api_url.clone()
    }
}

pub(crate) fn interpret_response(
    program_id: u32,
    status: u16,
    body: &str,
) -> Result<AdmissionsSnapshot, AdmissionsError> {
    if status >= 400 {
        return Err(AdmissionsError::Status {
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    decode_payload(program_id, body.as_bytes())
}
