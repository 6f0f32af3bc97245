use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::select::normalize::normalize_label;

/// One domain record from the console backend: a server, network, volume,
/// security group, floating IP, key pair, router, snapshot, user, or
/// project. Fields beyond the common trio are kept verbatim in `extra` so
/// projections can target them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub kind: String,
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ResourceRecord {
    /// Look up a field by name, rendering scalars as strings.
    ///
    /// `kind`, `id`, and `name` resolve to the fixed fields; anything else
    /// is taken from `extra`. Arrays, objects, and null are not usable as
    /// projection targets and resolve to `None`.
    pub fn field(&self, field_name: &str) -> Option<String> {
        match field_name {
            "kind" => Some(self.kind.clone()),
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            _ => match self.extra.get(field_name)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            },
        }
    }
}

/// An ordered collection of resource records, as fetched from the backend
/// in one refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub resources: Vec<ResourceRecord>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Records grouped by kind. Kinds iterate in sorted order; records
    /// keep their catalog order within each kind.
    pub fn by_kind(&self) -> BTreeMap<&str, Vec<&ResourceRecord>> {
        let mut map: BTreeMap<&str, Vec<&ResourceRecord>> = BTreeMap::new();
        for record in &self.resources {
            map.entry(record.kind.as_str()).or_default().push(record);
        }
        map
    }

    /// Records of one kind, in catalog order.
    pub fn of_kind(&self, kind: &str) -> Vec<&ResourceRecord> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }
}

/// Which record fields feed the two projections of the selection index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProjection {
    #[serde(default = "default_stored_field")]
    pub stored_field: String,

    #[serde(default = "default_label_field")]
    pub label_field: String,
}

impl Default for FieldProjection {
    fn default() -> Self {
        Self {
            stored_field: "id".to_string(),
            label_field: "name".to_string(),
        }
    }
}

impl FieldProjection {
    /// Stored-value projection. Missing fields project to the empty
    /// string; the index treats that like any other value and `token_for`
    /// will simply never match it.
    pub fn stored_of(&self, record: &ResourceRecord) -> String {
        record.field(&self.stored_field).unwrap_or_default()
    }

    /// Label projection, whitespace-normalized so padding differences
    /// don't split collision groups.
    pub fn label_of(&self, record: &ResourceRecord) -> String {
        normalize_label(&record.field(&self.label_field).unwrap_or_default())
    }
}

/// Per-kind projection overrides over a shared default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionTable {
    #[serde(default)]
    pub default: FieldProjection,

    #[serde(default)]
    pub per_kind: BTreeMap<String, FieldProjection>,
}

impl ProjectionTable {
    pub fn for_kind(&self, kind: &str) -> &FieldProjection {
        self.per_kind.get(kind).unwrap_or(&self.default)
    }
}

fn default_stored_field() -> String {
    "id".to_string()
}

fn default_label_field() -> String {
    "name".to_string()
}
