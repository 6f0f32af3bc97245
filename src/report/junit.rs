use crate::report::report_model::AuditReport;

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems (Jenkins, GitHub Actions,
/// GitLab CI), so a pipeline can gate merges on label collisions.
///
/// Produces standard JUnit XML:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="catalog.json" tests="2" failures="1">
///   <testcase name="network" classname="select-index" />
///   <testcase name="keypair" classname="select-index">
///     <failure message="1 colliding label(s)" type="LabelCollision">
///       "deploy-key" x2: kp-1, kp-7
///     </failure>
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(report: &AuditReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for kind in &report.kind_audits {
        if kind.clean() {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"select-index\" />\n",
                escape_xml(&kind.kind)
            ));
        } else {
            let details: Vec<String> = kind
                .collisions
                .iter()
                .map(|group| {
                    format!(
                        "\"{}\" x{}: {}",
                        group.label,
                        group.stored_values.len(),
                        group.stored_values.join(", ")
                    )
                })
                .collect();

            let failure_message = format!("{} colliding label(s)", kind.collisions.len());
            let failure_body = details.join("\n");

            cases.push_str(&format!(
                "  <testcase name=\"{name}\" classname=\"select-index\">\n    <failure message=\"{message}\" type=\"LabelCollision\">{body}</failure>\n  </testcase>\n",
                name = escape_xml(&kind.kind),
                message = escape_xml(&failure_message),
                body = escape_xml(&failure_body),
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.catalog_name),
        tests = report.kinds,
        failures = report.dirty_kinds,
        time = time_attr,
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
