use crate::report::report_model::AuditReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a collision audit report for terminal output.
///
/// Produces output like:
/// ```text
/// === Label Audit: catalog.json ===
///
/// ✓ CLEAN  network (3 records)
/// ✗ DUPES  keypair (4 records, 1 colliding label)
///     "deploy-key" × 2: kp-1 → "deploy-key (1)", kp-7 → "deploy-key (2)"
///
/// === Results: 1 clean, 1 with collisions (2 kinds, 7 records) ===
/// ```
pub fn format_audit_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Label Audit: {} ===\n\n", report.catalog_name));

    for kind in &report.kind_audits {
        let marker = if kind.clean() {
            "\u{2713} CLEAN"
        } else {
            "\u{2717} DUPES"
        };

        if kind.clean() {
            out.push_str(&format!("{}  {} ({} records)\n", marker, kind.kind, kind.total));
        } else {
            out.push_str(&format!(
                "{}  {} ({} records, {} colliding label{})\n",
                marker,
                kind.kind,
                kind.total,
                kind.collisions.len(),
                if kind.collisions.len() == 1 { "" } else { "s" }
            ));

            for group in &kind.collisions {
                let members = group
                    .stored_values
                    .iter()
                    .zip(group.disambiguated.iter())
                    .map(|(stored, label)| format!("{} → \"{}\"", stored, label))
                    .collect::<Vec<_>>()
                    .join(", ");

                out.push_str(&format!(
                    "    \"{}\" × {}: {}\n",
                    group.label,
                    group.stored_values.len(),
                    members
                ));
            }
        }
    }

    // Summary line
    out.push_str(&format!(
        "\n=== Results: {} clean, {} with collisions ({} kinds, {} records)",
        report.kinds - report.dirty_kinds,
        report.dirty_kinds,
        report.kinds,
        report.records
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
