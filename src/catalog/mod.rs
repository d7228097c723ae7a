//! Project catalog: the static configuration data behind the showcase.
//!
//! A catalog holds the ordered project list shown by the carousel, the
//! monthly progress points plotted on the statistics page and, optionally,
//! line counts for one featured project. The built-in catalog is embedded in
//! the binary; [`load_catalog`] reads a replacement from YAML or JSON.

mod builtin;
mod loader;
mod validation;

pub use builtin::builtin;
pub use loader::{CatalogFormat, load_catalog, load_or_builtin, parse_catalog_str};
pub use validation::validate_catalog;

use crate::model::{FeaturedStats, Month, ProgressPoint, ProgressTable, Project, months_of};
use serde::{Deserialize, Serialize};

/// Everything the showcase displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
    /// Explicit month axis; derived from `progress` when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<Month>,
    #[serde(default)]
    pub progress: Vec<ProgressPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<FeaturedStats>,
}

impl Catalog {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    /// Month axis used by charts.
    pub fn month_axis(&self) -> Vec<Month> {
        if self.months.is_empty() {
            months_of(&self.progress)
        } else {
            self.months.clone()
        }
    }

    /// Progress series for every project with data, in catalog order.
    pub fn progress_table(&self) -> ProgressTable {
        ProgressTable::build(
            &self.month_axis(),
            &self.progress,
            self.projects.iter().map(|p| p.id.as_str()),
        )
    }

    /// The featured project together with its line counts.
    pub fn featured(&self) -> Option<(&Project, &FeaturedStats)> {
        let stats = self.featured.as_ref()?;
        self.project(&stats.project_id).map(|p| (p, stats))
    }
}
