use super::views::ProjectionReport;
use std::io::{self, Write};

const RULE: &str = "-------------------------------------------------";

/// Output formats understood by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const fn label(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

pub fn render_text<W: Write>(report: &ProjectionReport, out: &mut W) -> io::Result<()> {
    let program = &report.program;
    writeln!(out, "Direction: {}", program.direction)?;
    writeln!(out, "Budget places: {}", program.budget_places)?;
    writeln!(out, "Target quota: {}", program.target_quota)?;
    match program.updated_at {
        Some(updated_at) => writeln!(out, "Data as of: {}", updated_at.format("%Y-%m-%d %H:%M:%S"))?,
        None => writeln!(out, "Data as of: unknown")?,
    }

    let target = &report.target;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Exam + achievements score: {}", target.total_score)?;
    writeln!(out, "Diploma average: {:.4}", target.diploma_average)?;
    writeln!(out, "Current place: {}", target.current_place)?;
    writeln!(
        out,
        "Originals submitted: {}",
        if target.originals_submitted { "yes" } else { "no" }
    )?;

    let priority = &report.priority_place;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Place among priority 1: {}", priority.any)?;
    writeln!(
        out,
        "Place among priority 1 with originals: {}",
        priority.with_originals
    )?;

    let projected = &report.projected_place;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Place counting pending exams as passed: {}",
        projected.any
    )?;
    writeln!(
        out,
        "Place counting pending exams, priority 1: {}",
        projected.priority_one
    )?;
    writeln!(
        out,
        "Place counting pending exams, priority 1 with originals: {}",
        projected.priority_one_with_originals
    )?;

    let recommended = &report.recommended_place;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Place among recommended for admission: {}", recommended.any)?;
    writeln!(
        out,
        "Place among recommended for admission (originals only): {}",
        recommended.with_originals
    )?;

    Ok(())
}

pub fn render_json<W: Write>(report: &ProjectionReport, out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
