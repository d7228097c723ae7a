//! **Terminal showcase for the Solovina game-localization team.**
//!
//! `solovina` presents the team's localization projects in a terminal: an
//! animated title screen, a project carousel with autoplay, and a progress
//! dashboard with monthly completion series and line counts for a featured
//! project.
//!
//! ## Modules
//!
//! - **[`carousel`]**: the reusable [`Carousel`] state machine: wrap-around
//!   navigation, direction tracking, the autoplay dwell timer and
//!   keyboard / drag input mapping. It knows nothing about rendering.
//! - **[`catalog`]**: the project [`Catalog`]: the built-in data set, YAML
//!   and JSON loading, and validation.
//! - **[`model`]**: projects, months, progress points and featured stats.
//! - **[`config`]**: configuration files, presets and validation.
//! - **[`tui`]**: the interactive ratatui front end.
//! - **[`cli`]**: handlers for the non-interactive subcommands.
//!
//! ## Driving a carousel
//!
//! ```
//! use std::time::{Duration, Instant};
//! use solovina::Carousel;
//!
//! let start = Instant::now();
//! let mut carousel = Carousel::new(vec!["p5", "cat", "ds"])
//!     .unwrap()
//!     .with_dwell(Duration::from_secs(5));
//! carousel.set_autoplay(true, start);
//!
//! assert_eq!(carousel.tick_at(start + Duration::from_secs(4)), None);
//! assert_eq!(carousel.tick_at(start + Duration::from_secs(5)), Some(1));
//! ```
//!
//! ## Reading the catalog
//!
//! ```
//! let catalog = solovina::catalog::builtin().unwrap();
//! let table = catalog.progress_table();
//! assert!(!table.is_empty());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Layout and chart math converts between usize, u16 and f64 freely;
    // all values are bounded by the terminal size or 100%.
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools
)]

pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod tui;

// Re-export main types for convenience
pub use carousel::{Carousel, CarouselError, CarouselState, Direction, NavCommand};
pub use catalog::Catalog;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{Result, ShowcaseError};
pub use model::{FeaturedStats, Month, ProgressTable, Project, ProjectStatus};
