//! `show` command: the interactive showcase.

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::tui::{App, Theme, run_tui, set_theme};
use anyhow::Result;
use std::time::Instant;

/// Run the TUI until the user quits.
///
/// With `explicit_theme` the configured theme wins over the saved
/// preference; otherwise the last theme picked in the TUI is restored.
pub fn run_show(catalog: Catalog, config: &AppConfig, explicit_theme: bool) -> Result<()> {
    if explicit_theme {
        set_theme(Theme::from_name(&config.tui.theme));
    } else {
        App::load_theme(&config.tui.theme);
    }

    let mut app = App::new(catalog, config, Instant::now())?.with_theme_persistence(true);
    run_tui(&mut app, config.tui.tick_rate_ms)?;
    tracing::debug!("Showcase closed");
    Ok(())
}
