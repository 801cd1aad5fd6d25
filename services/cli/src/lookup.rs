use crate::cli::{Cli, OutputFormat};
use abit_rank::admissions::{AdmissionsSource, FileAdmissionsSource, HttpAdmissionsSource};
use abit_rank::config::AppConfig;
use abit_rank::error::AppError;
use abit_rank::ranking::NationalId;
use abit_rank::report::{render_json, render_text, ProjectionReport, ReportFormat};
use abit_rank::service::RankLookupService;
use abit_rank::telemetry;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

pub(crate) fn run_lookup(cli: Cli) -> Result<(), AppError> {
    let Cli {
        snils,
        program,
        from_file,
        format,
        api_url,
    } = cli;

    let mut config = AppConfig::load()?;
    if let Some(api_url) = api_url {
        config.source.set_api_url(api_url)?;
    }

    telemetry::init(&config.telemetry)?;

    let program_id = program.unwrap_or(config.source.default_program_id);
    let source: Arc<dyn AdmissionsSource> = match from_file {
        Some(path) => Arc::new(FileAdmissionsSource::new(path)),
        None => Arc::new(HttpAdmissionsSource::from_config(&config.source)),
    };
    let format = report_format(format);
    info!(
        ?config.environment,
        program_id,
        source = %source.describe(),
        format = format.label(),
        "looking up applicant"
    );

    let service = RankLookupService::new(source);
    let report = service.lookup(program_id, &NationalId::new(snils.trim()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&report, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn report_format(format: OutputFormat) -> ReportFormat {
    match format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::Json,
    }
}

fn write_report<W: Write>(
    report: &ProjectionReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => render_text(report, out)?,
        ReportFormat::Json => render_json(report, out)?,
    }
    Ok(())
}
