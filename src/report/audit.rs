use std::collections::BTreeMap;

use crate::catalog::record::{Catalog, ProjectionTable};
use crate::report::report_model::{AuditReport, CollisionGroup, KindAudit};
use crate::select::index::build;

/// Audit a whole catalog for label collisions.
///
/// Builds the selection index per kind and collects every base label borne
/// by more than one record, together with the disambiguated labels the
/// index assigned.
pub fn audit_catalog(catalog_name: &str, catalog: &Catalog, projections: &ProjectionTable) -> AuditReport {
    let mut kind_audits = Vec::new();

    for (kind, records) in catalog.by_kind() {
        kind_audits.push(audit_kind(kind, &records, projections));
    }

    AuditReport::from_kinds(catalog_name, kind_audits)
}

/// Audit the records of one kind.
pub fn audit_kind(
    kind: &str,
    records: &[&crate::catalog::record::ResourceRecord],
    projections: &ProjectionTable,
) -> KindAudit {
    let projection = projections.for_kind(kind);
    let index = build(
        records,
        |r| projection.stored_of(r),
        |r| projection.label_of(r),
    );

    // Group duplicate options by base label, keeping catalog order inside
    // each group.
    let mut groups: BTreeMap<&str, CollisionGroup> = BTreeMap::new();
    for (opt, record) in index.entries() {
        if !opt.duplicate {
            continue;
        }

        let group = groups
            .entry(opt.base_label.as_str())
            .or_insert_with(|| CollisionGroup {
                label: opt.base_label.clone(),
                stored_values: vec![],
                disambiguated: vec![],
            });
        group.stored_values.push(projection.stored_of(record));
        group.disambiguated.push(opt.label.clone());
    }

    KindAudit {
        kind: kind.to_string(),
        total: records.len(),
        collisions: groups.into_values().collect(),
    }
}
