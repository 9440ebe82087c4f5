//! Render use cases: console text and GitHub annotations from in-memory reports.

use idguard_render::Palette;
use idguard_types::IdguardReport;

pub fn render_text(report: &IdguardReport, palette: &Palette) -> Vec<String> {
    idguard_render::render_text(report, palette)
}

pub fn render_annotations(report: &IdguardReport) -> Vec<String> {
    idguard_render::render_github_annotations(report)
}
