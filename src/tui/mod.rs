//! Interactive showcase built on ratatui.
//!
//! The screen is split into a navigation bar, one of three sections and a
//! footer with key hints:
//!
//! - **Hero**: the animated team title and a call to action
//! - **Projects**: the project carousel with dots and an autoplay bar
//! - **Stats**: progress over time (chart or table) and the featured project
//!
//! Rendering records clickable regions into [`App`], so mouse taps are
//! resolved against whatever was drawn in the previous frame.

pub mod animation;
pub mod app;
pub(crate) mod constants;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::{App, HitMap, HitTarget, Section, StatsView};
pub use constants::{MIN_HEIGHT, MIN_WIDTH};
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use theme::{
    ColorScheme, Styles, Theme, colors, set_theme, toggle_theme,
};
pub use ui::{render, run_tui};
