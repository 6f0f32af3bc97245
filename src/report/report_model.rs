use serde::{Deserialize, Serialize};

// ============================================================================
// Collision audit report — aggregates per-kind audit results
// ============================================================================

/// One display label borne by more than one record of a kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionGroup {
    /// The colliding base label
    pub label: String,

    /// Stored values of the colliding records, in catalog order
    pub stored_values: Vec<String>,

    /// Labels the selection index assigned to them
    pub disambiguated: Vec<String>,
}

/// Audit result for a single resource kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindAudit {
    pub kind: String,

    /// Total records of this kind
    pub total: usize,

    /// Label collision groups, sorted by label
    pub collisions: Vec<CollisionGroup>,
}

impl KindAudit {
    pub fn clean(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Aggregated collision report for a whole catalog.
///
/// Built from a `Vec<KindAudit>` via `from_kinds()`. Consumed by the
/// console, JSON, and JUnit reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Catalog source (path or URL)
    pub catalog_name: String,

    /// Number of kinds audited
    pub kinds: usize,

    /// Total records across all kinds
    pub records: usize,

    /// Kinds with at least one collision
    pub dirty_kinds: usize,

    /// Collision groups across all kinds
    pub collision_groups: usize,

    /// Audit duration in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    /// Per-kind results
    pub kind_audits: Vec<KindAudit>,
}

impl AuditReport {
    /// Build a catalog report from per-kind audits.
    ///
    /// Automatically computes record, dirty-kind, and group totals.
    pub fn from_kinds(catalog_name: &str, kind_audits: Vec<KindAudit>) -> Self {
        let kinds = kind_audits.len();
        let records = kind_audits.iter().map(|k| k.total).sum();
        let dirty_kinds = kind_audits.iter().filter(|k| !k.clean()).count();
        let collision_groups = kind_audits.iter().map(|k| k.collisions.len()).sum();
        Self {
            catalog_name: catalog_name.to_string(),
            kinds,
            records,
            dirty_kinds,
            collision_groups,
            duration_ms: None,
            kind_audits,
        }
    }

    /// Set the audit duration.
    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether no kind carries a label collision.
    pub fn clean(&self) -> bool {
        self.dirty_kinds == 0
    }
}
