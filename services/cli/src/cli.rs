use crate::lookup::run_lookup;
use abit_rank::error::AppError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "abit-rank",
    about = "Estimate an applicant's place in an admissions competition list",
    version
)]
pub(crate) struct Cli {
    /// Applicant SNILS as published in the rating list
    pub(crate) snils: String,
    /// Program identifier (defaults to ABIT_PROGRAM_ID or 7431)
    #[arg(short = 'p', long = "program")]
    pub(crate) program: Option<u32>,
    /// Read a saved rating payload instead of calling the API
    #[arg(long)]
    pub(crate) from_file: Option<PathBuf>,
    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Override the rating endpoint (defaults to ABIT_API_URL)
    #[arg(long)]
    pub(crate) api_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    run_lookup(cli)
}
