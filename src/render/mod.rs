pub mod csv;
pub mod html;

use crate::access::{visible_items, VisibilityPolicy};
use crate::core::{metrics, Item, ReportFormat, User, VisibleItem};
use log::info;

/// Section renderers for one report format. Sections are pure and
/// string-producing; punctuation and line-break placement are part of the
/// output contract.
pub trait SectionRenderer {
    fn header(&self, user: &User) -> String;
    fn body(&self, user: &User, items: &[VisibleItem]) -> String;
    fn footer(&self, total: f64) -> String;
}

/// Renderer lookup for a format. `Unknown` has no renderer; every section
/// degrades to the empty string rather than an error.
pub fn renderer_for(format: ReportFormat) -> Option<Box<dyn SectionRenderer>> {
    match format {
        ReportFormat::Csv => Some(Box::new(csv::CsvRenderer)),
        ReportFormat::Html => Some(Box::new(html::HtmlRenderer)),
        ReportFormat::Unknown => None,
    }
}

/// Generate a finished report: filter, total, render the three sections,
/// assemble, trim. Pure and deterministic; identical inputs produce
/// identical strings.
pub fn generate_report(
    format: ReportFormat,
    user: &User,
    items: &[Item],
    policy: &VisibilityPolicy,
) -> String {
    let visible = visible_items(user, items, policy);
    let total = metrics::total_value(&visible);

    let (header, body, footer) = match renderer_for(format) {
        Some(renderer) => (
            renderer.header(user),
            renderer.body(user, &visible),
            renderer.footer(total),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    info!(
        "generated {} report for {}: {} rows ({} priority), total {}",
        format,
        user.name,
        visible.len(),
        metrics::count_priority(&visible),
        total
    );

    format!("{header}{body}{footer}").trim().to_string()
}
