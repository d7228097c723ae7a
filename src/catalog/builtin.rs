//! The catalog compiled into the binary.

use super::{Catalog, CatalogFormat, parse_catalog_str};
use crate::error::{ErrorContext, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.yaml");

/// Parse and validate the embedded catalog.
pub fn builtin() -> Result<Catalog> {
    parse_catalog_str(BUILTIN_CATALOG, CatalogFormat::Yaml).context("built-in catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().expect("built-in catalog must parse");
        assert_eq!(catalog.projects.len(), 10);
        assert_eq!(catalog.projects[0].id, "persona5");
        assert_eq!(catalog.month_axis().len(), 9);
    }

    #[test]
    fn test_builtin_progress_table() {
        let catalog = builtin().unwrap();
        let table = catalog.progress_table();
        let ids: Vec<&str> = table.series().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                "persona5",
                "dave-the-diver",
                "the-missing",
                "echo-generation",
                "ravenlok"
            ]
        );
        assert_eq!(table.latest("persona5"), Some(60));
    }

    #[test]
    fn test_builtin_featured() {
        let catalog = builtin().unwrap();
        let (project, stats) = catalog.featured().unwrap();
        assert_eq!(project.name, "Persona 5 Royal");
        assert_eq!(stats.percent(), 60);
    }
}
