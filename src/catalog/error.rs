use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    /// Reading a catalog file or directory failed
    Io { path: String, source: std::io::Error },

    /// JSON catalog body could not be parsed
    JsonParse { path: String, source: serde_json::Error },

    /// YAML catalog body could not be parsed
    YamlParse { path: String, source: serde_yaml::Error },

    /// HTTP transport failure while fetching a remote catalog
    Http { url: String, source: reqwest::Error },

    /// Remote catalog endpoint answered with a non-success status
    HttpStatus { url: String, status: u16 },

    /// File extension is neither JSON nor YAML
    UnsupportedFormat { path: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "Failed to read catalog '{}': {}", path, source)
            }
            CatalogError::JsonParse { path, source } => {
                write!(f, "Invalid JSON catalog '{}': {}", path, source)
            }
            CatalogError::YamlParse { path, source } => {
                write!(f, "Invalid YAML catalog '{}': {}", path, source)
            }
            CatalogError::Http { url, source } => {
                write!(f, "Catalog fetch from '{}' failed: {}", url, source)
            }
            CatalogError::HttpStatus { url, status } => {
                write!(f, "Catalog endpoint '{}' answered HTTP {}", url, status)
            }
            CatalogError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "Unsupported catalog format '{}' (expected .json, .yaml, or .yml)",
                    path
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::JsonParse { source, .. } => Some(source),
            CatalogError::YamlParse { source, .. } => Some(source),
            CatalogError::Http { source, .. } => Some(source),
            _ => None,
        }
    }
}
