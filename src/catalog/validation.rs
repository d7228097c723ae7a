//! Consistency checks applied to every loaded catalog.

use super::Catalog;
use crate::error::CatalogErrorKind;
use std::collections::HashSet;

/// Highest valid progress value.
const MAX_PERCENT: u16 = 100;

/// Check a catalog, returning the first problem found.
///
/// Progress points whose month is missing from an explicit month axis are
/// not errors; they are left off the charts.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogErrorKind> {
    if catalog.projects.is_empty() {
        return Err(CatalogErrorKind::Empty);
    }

    let mut seen = HashSet::new();
    for project in &catalog.projects {
        if !seen.insert(project.id.as_str()) {
            return Err(CatalogErrorKind::DuplicateId(project.id.clone()));
        }
    }

    for point in &catalog.progress {
        if !seen.contains(point.project_id.as_str()) {
            return Err(CatalogErrorKind::UnknownProject {
                project_id: point.project_id.clone(),
                context: format!("progress at {}", point.month),
            });
        }
        if point.percent > MAX_PERCENT {
            return Err(CatalogErrorKind::PercentOutOfRange {
                project_id: point.project_id.clone(),
                month: point.month.to_string(),
                percent: point.percent,
            });
        }
    }

    if !catalog.months.is_empty() {
        let axis: HashSet<_> = catalog.months.iter().collect();
        let off_axis = catalog
            .progress
            .iter()
            .filter(|p| !axis.contains(&p.month))
            .count();
        if off_axis > 0 {
            tracing::warn!("{off_axis} progress point(s) fall outside the month axis and are ignored");
        }
    }

    if let Some(featured) = &catalog.featured {
        if !seen.contains(featured.project_id.as_str()) {
            return Err(CatalogErrorKind::UnknownProject {
                project_id: featured.project_id.clone(),
                context: "featured statistics".to_string(),
            });
        }
        if featured.total_lines == 0 {
            return Err(CatalogErrorKind::InvalidFeatured(
                "total_lines must be greater than zero".to_string(),
            ));
        }
        if featured.translated_lines > featured.total_lines {
            return Err(CatalogErrorKind::InvalidFeatured(format!(
                "translated_lines ({}) exceeds total_lines ({})",
                featured.translated_lines, featured.total_lines
            )));
        }
    }

    Ok(())
}
