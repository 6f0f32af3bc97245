use std::time::Duration;

use crate::catalog::error::CatalogError;
use crate::catalog::record::Catalog;

/// Whether a catalog source names an HTTP endpoint rather than a path.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a catalog JSON document from the console backend.
///
/// Blocking GET with a bounded timeout; the endpoint is expected to answer
/// with the same `{ "resources": [...] }` document the file loader reads.
pub fn fetch_catalog(url: &str, timeout: Duration) -> Result<Catalog, CatalogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CatalogError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let response = client.get(url).send().map_err(|e| CatalogError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.json::<Catalog>().map_err(|e| CatalogError::Http {
        url: url.to_string(),
        source: e,
    })
}
