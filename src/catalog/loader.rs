use std::path::Path;
use std::time::Duration;

use crate::catalog::error::CatalogError;
use crate::catalog::record::Catalog;
use crate::catalog::remote::{fetch_catalog, is_url};

/// Load a catalog from a JSON/YAML file or a directory of such files.
///
/// Directory entries are concatenated in file-name order so repeated loads
/// see the same record order regardless of directory iteration order.
pub fn load_catalog(path: &str) -> Result<Catalog, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::Io {
        path: path.to_string(),
        source: e,
    })?;

    if !metadata.is_dir() {
        return load_catalog_file(Path::new(path));
    }

    let entries = std::fs::read_dir(path).map_err(|e| CatalogError::Io {
        path: path.to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let p = entry.path();
        if p.extension()
            .map_or(false, |e| e == "json" || e == "yaml" || e == "yml")
        {
            files.push(p);
        }
    }
    files.sort();

    let mut catalog = Catalog::default();
    for file in &files {
        let mut part = load_catalog_file(file)?;
        catalog.resources.append(&mut part.resources);
    }

    Ok(catalog)
}

/// Load a catalog from a local path or an http(s) endpoint.
pub fn load_source(source: &str, timeout: Duration) -> Result<Catalog, CatalogError> {
    if is_url(source) {
        fetch_catalog(source, timeout)
    } else {
        load_catalog(source)
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: display.clone(),
        source: e,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| CatalogError::JsonParse {
            path: display,
            source: e,
        }),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| CatalogError::YamlParse {
                path: display,
                source: e,
            })
        }
        _ => Err(CatalogError::UnsupportedFormat { path: display }),
    }
}
