use select_index::catalog::record::{Catalog, ResourceRecord};

pub fn record(kind: &str, id: &str, name: &str) -> ResourceRecord {
    ResourceRecord {
        kind: kind.to_string(),
        id: id.to_string(),
        name: name.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// The canonical duplicate-label fixture: two networks both named
/// "default" plus one named "private".
pub fn network_catalog() -> Catalog {
    Catalog {
        resources: vec![
            record("network", "n1", "default"),
            record("network", "n2", "default"),
            record("network", "n3", "private"),
        ],
    }
}

/// A temp-dir path for a test fixture. Callers create and clean up the
/// directory themselves.
pub fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(name)
}
