//! # Introduction
//!
//! Sortty animates five classic sorting algorithms in the terminal. The
//! array is drawn as bars and every comparison and every move is shown as
//! its own frame, separated by a configurable delay, so the algorithm can be
//! watched as it works. A run can be cancelled at any step.
//!
//! ## Run pipeline
//!
//! ```text
//! Input → RunController → Engine ⇄ StepClock → Renderer
//! ```
//!
//! 1. [`sequence`]: the values, per-index settled markers and counters.
//! 2. [`clock`]: the stepping clock, the only place a run waits; it renders
//!    a frame, drains input for the step delay and reports quit/cancel.
//! 3. [`algorithms`]: bubble, insertion, selection, merge and quick sort,
//!    instrumented to step after every comparison and mutation.
//! 4. [`controller`]: the run state machine and command dispatch.
//! 5. [`config`] / [`errors`] / [`logging`] / [`rng`]: settings and
//!    command line, refusal and argument errors, tracing setup, shuffling.
//! 6. [`ui`]: ratatui renderer and crossterm input; not part of the stable
//!    library API.

pub mod algorithms;
pub mod clock;
pub mod config;
pub mod controller;
pub mod errors;
pub mod logging;
pub mod rng;
pub mod sequence;
pub mod ui;
