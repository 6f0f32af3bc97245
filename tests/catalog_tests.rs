use select_index::catalog::error::CatalogError;
use select_index::catalog::loader::{load_catalog, load_source};
use select_index::catalog::record::{Catalog, FieldProjection, ProjectionTable, ResourceRecord};
use select_index::catalog::remote::is_url;

mod common;
use crate::common::utils::{network_catalog, record, temp_dir};

// ============================================================================
// 1. Record field lookup
// ============================================================================

#[test]
fn field_resolves_fixed_and_extra_fields() {
    let json = r#"{
        "kind": "server",
        "id": "vm-1",
        "name": "web-01",
        "flavor": "m1.small",
        "vcpus": 4,
        "ha": true,
        "tags": ["prod"],
        "metadata": {"zone": "a"}
    }"#;
    let record: ResourceRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.field("kind").as_deref(), Some("server"));
    assert_eq!(record.field("id").as_deref(), Some("vm-1"));
    assert_eq!(record.field("name").as_deref(), Some("web-01"));
    assert_eq!(record.field("flavor").as_deref(), Some("m1.small"));
    assert_eq!(record.field("vcpus").as_deref(), Some("4"), "numbers stringify");
    assert_eq!(record.field("ha").as_deref(), Some("true"), "bools stringify");
    assert_eq!(record.field("tags"), None, "arrays are not projectable");
    assert_eq!(record.field("metadata"), None, "objects are not projectable");
    assert_eq!(record.field("missing"), None);
}

#[test]
fn record_without_name_defaults_to_empty() {
    let json = r#"{"kind": "keypair", "id": "kp-1"}"#;
    let record: ResourceRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "");
}

// ============================================================================
// 2. Kind grouping
// ============================================================================

#[test]
fn by_kind_groups_sorted_and_preserves_catalog_order() {
    let catalog = Catalog {
        resources: vec![
            record("volume", "v2", "data"),
            record("network", "n1", "default"),
            record("volume", "v1", "boot"),
        ],
    };

    let by_kind = catalog.by_kind();
    let kinds: Vec<_> = by_kind.keys().copied().collect();
    assert_eq!(kinds, vec!["network", "volume"], "kinds iterate sorted");

    let volume_ids: Vec<_> = by_kind["volume"].iter().map(|r| r.id.as_str()).collect();
    assert_eq!(volume_ids, vec!["v2", "v1"], "catalog order kept within a kind");
}

#[test]
fn of_kind_filters_in_order() {
    let catalog = network_catalog();
    let networks = catalog.of_kind("network");
    assert_eq!(networks.len(), 3);
    assert!(catalog.of_kind("server").is_empty());
}

// ============================================================================
// 3. Projections
// ============================================================================

#[test]
fn default_projection_is_id_and_name() {
    let projection = FieldProjection::default();
    let r = record("network", "n1", "default");

    assert_eq!(projection.stored_of(&r), "n1");
    assert_eq!(projection.label_of(&r), "default");
}

#[test]
fn missing_projection_fields_yield_empty_strings() {
    let projection = FieldProjection {
        stored_field: "uuid".to_string(),
        label_field: "display_name".to_string(),
    };
    let r = record("network", "n1", "default");

    assert_eq!(projection.stored_of(&r), "");
    assert_eq!(projection.label_of(&r), "");
}

#[test]
fn label_projection_normalizes_whitespace() {
    let projection = FieldProjection::default();
    let r = record("network", "n1", "  default   net  ");

    assert_eq!(projection.label_of(&r), "default net");
}

#[test]
fn projection_table_falls_back_to_default() {
    let mut table = ProjectionTable::default();
    table.per_kind.insert(
        "keypair".to_string(),
        FieldProjection {
            stored_field: "name".to_string(),
            label_field: "name".to_string(),
        },
    );

    assert_eq!(table.for_kind("keypair").stored_field, "name");
    assert_eq!(table.for_kind("network").stored_field, "id", "unknown kinds use the default");
}

// ============================================================================
// 4. File loading
// ============================================================================

#[test]
fn load_catalog_reads_json_and_yaml() {
    let dir = temp_dir("select_index_catalog_load");
    std::fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("catalog.json");
    std::fs::write(
        &json_path,
        r#"{"resources": [{"kind": "network", "id": "n1", "name": "default"}]}"#,
    )
    .unwrap();

    let yaml_path = dir.join("catalog.yaml");
    std::fs::write(
        &yaml_path,
        "resources:\n  - kind: network\n    id: n2\n    name: private\n",
    )
    .unwrap();

    let from_json = load_catalog(json_path.to_str().unwrap()).unwrap();
    assert_eq!(from_json.len(), 1);
    assert_eq!(from_json.resources[0].id, "n1");

    let from_yaml = load_catalog(yaml_path.to_str().unwrap()).unwrap();
    assert_eq!(from_yaml.resources[0].name, "private");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_catalog_concatenates_directory_in_file_name_order() {
    let dir = temp_dir("select_index_catalog_dir");
    std::fs::create_dir_all(&dir).unwrap();

    // Written out of order on purpose
    std::fs::write(
        dir.join("b_volumes.json"),
        r#"{"resources": [{"kind": "volume", "id": "v1", "name": "boot"}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("a_networks.json"),
        r#"{"resources": [{"kind": "network", "id": "n1", "name": "default"}]}"#,
    )
    .unwrap();
    std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let catalog = load_catalog(dir.to_str().unwrap()).unwrap();
    let ids: Vec<_> = catalog.resources.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["n1", "v1"], "a_networks.json loads before b_volumes.json");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_catalog_rejects_unknown_extensions() {
    let dir = temp_dir("select_index_catalog_bad_ext");
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join("catalog.txt");
    std::fs::write(&path, "whatever").unwrap();

    let err = load_catalog(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }), "got: {}", err);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_catalog_missing_file_is_io_error() {
    let err = load_catalog("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }), "got: {}", err);
}

#[test]
fn load_catalog_reports_malformed_json() {
    let dir = temp_dir("select_index_catalog_bad_json");
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = load_catalog(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CatalogError::JsonParse { .. }), "got: {}", err);

    std::fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// 5. Source dispatch
// ============================================================================

#[test]
fn is_url_detects_http_schemes() {
    assert!(is_url("http://console.example.com/api/catalog"));
    assert!(is_url("https://console.example.com/api/catalog"));
    assert!(!is_url("catalog.json"));
    assert!(!is_url("/var/lib/catalog"));
}

#[test]
fn load_source_dispatches_paths_to_the_file_loader() {
    let dir = temp_dir("select_index_load_source");
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join("catalog.json");
    std::fs::write(
        &path,
        r#"{"resources": [{"kind": "network", "id": "n1", "name": "default"}]}"#,
    )
    .unwrap();

    let catalog = load_source(path.to_str().unwrap(), std::time::Duration::from_secs(1)).unwrap();
    assert_eq!(catalog.len(), 1);

    std::fs::remove_dir_all(&dir).ok();
}
