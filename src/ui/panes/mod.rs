//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`toolbar`]: Clickable buttons with layout and hit-testing
//! - [`stats`]: Algorithm, size, delay and counters line
//! - [`bars`]: The sequence as a bar chart with settled/highlight colours
//! - [`status`]: Status bar with run state and keybindings
//!
//! Each module exports a primary `render_*` function; none of them keep
//! state between frames.

pub mod bars;
pub mod stats;
pub mod status;
pub mod toolbar;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, Bars};
pub use stats::render_stats_line;
pub use status::render_status_bar;
pub use toolbar::{hit_test, render_toolbar, toolbar_height, ToolButton};
