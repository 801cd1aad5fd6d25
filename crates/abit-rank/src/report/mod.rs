mod render;
pub mod views;

pub use render::{render_json, render_text, ReportFormat};
pub use views::ProjectionReport;
