//! Data model: projects, progress series and featured statistics.

mod progress;
mod project;

pub use progress::{FeaturedStats, Month, ProgressPoint, ProgressTable, months_of};
pub use project::{
    AccentColor, DEFAULT_DOWNLOAD_LABEL, DownloadLink, Project, ProjectStatus, gradient_at,
};
