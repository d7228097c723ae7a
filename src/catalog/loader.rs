//! Reading catalogs from files and strings.

use super::{Catalog, builtin, validate_catalog};
use crate::error::{ErrorContext, Result, ShowcaseError};
use std::path::Path;

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON, anything else is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse and validate a catalog from a string.
pub fn parse_catalog_str(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog: Catalog = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    validate_catalog(&catalog)
        .map_err(|kind| ShowcaseError::catalog("validating catalog", kind))?;
    Ok(catalog)
}

/// Load a catalog file, choosing the format from its extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| ShowcaseError::io(path, e))?;
    let catalog = parse_catalog_str(&content, CatalogFormat::from_path(path))
        .with_context(|| format!("loading {}", path.display()))?;
    tracing::info!(
        "Loaded catalog from {} ({} projects)",
        path.display(),
        catalog.projects.len()
    );
    Ok(catalog)
}

/// Load `path` when given, otherwise the built-in catalog.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    path.map_or_else(builtin, load_catalog)
}
