use crate::report::report_model::AuditReport;

// ============================================================================
// JSON reporter — machine-readable output for the console frontend
// ============================================================================

/// Render an audit report as pretty-printed JSON.
pub fn render_json_report(report: &AuditReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
