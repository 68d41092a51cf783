//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into five layers:
//!
//! - **[`app`]**: the between-runs event loop and the terminal-backed
//!   [`StepClock`] used while a run is in progress
//! - **[`input`]**: maps crossterm key and mouse events to [`Command`]s
//!   and abstracts where those events come from
//! - **[`panes`]**: stateless render functions for the toolbar, stats line,
//!   bar chart and status bar
//! - **[`session`]**: raw mode and alternate screen, restored on drop or panic
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`RunController`] and call [`App::run`] to start the event loop.
//!
//! [`StepClock`]: crate::clock::StepClock
//! [`Command`]: crate::controller::Command
//! [`RunController`]: crate::controller::RunController
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use session::TerminalSession;
