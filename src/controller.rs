//! Run controller
//!
//! Owns the [`Sequence`] and [`Settings`] between runs and the run state
//! machine:
//!
//! ```text
//! Idle ──start──▶ Running ──▶ Completed | Cancelled | Quit
//!  ▲                              │          │
//!  └──── regenerate / resize ─────┴──────────┘
//! ```
//!
//! A run is started only from `Idle`, i.e. on freshly generated data. While a
//! run is in progress `start` holds the controller mutably, so the only
//! requests that get through are the cancel/quit signals reported by the
//! clock.

use crate::algorithms::{self, Algorithm};
use crate::clock::{Interrupt, StepClock};
use crate::config::Settings;
use crate::errors::ControlError;
use crate::rng::SeededRng;
use crate::sequence::Sequence;
use std::fmt;
use tracing::{debug, info, warn};

/// Where the controller is in its run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
    Quit,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Cancelled => "cancelled",
            RunState::Quit => "quit",
        };
        f.write_str(label)
    }
}

/// Discrete requests from the input side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Cancel,
    Select(Algorithm),
    Regenerate,
    Resize(i32),
    ChangeDelay(i32),
    Start,
}

pub struct RunController {
    sequence: Sequence,
    settings: Settings,
    state: RunState,
    rng: SeededRng,
}

impl RunController {
    /// Create a controller with freshly shuffled data of `settings.size()`
    pub fn new(settings: Settings, mut rng: SeededRng) -> Self {
        info!(target: "run", seed = rng.seed(), "shuffle seed");
        let sequence = Sequence::shuffled(settings.size(), &mut rng);
        RunController {
            sequence,
            settings,
            state: RunState::Idle,
            rng,
        }
    }

    /// Create a controller around existing data
    pub fn with_sequence(settings: Settings, sequence: Sequence, rng: SeededRng) -> Self {
        RunController {
            sequence,
            settings,
            state: RunState::Idle,
            rng,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Seed of the shuffle generator, for replaying a session with `--seed`
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_quit(&self) -> bool {
        self.state == RunState::Quit
    }

    /// Dispatch one command; `clock` is only used by `Start`
    pub fn apply<C: StepClock + ?Sized>(
        &mut self,
        command: Command,
        clock: &mut C,
    ) -> Result<RunState, ControlError> {
        match command {
            Command::Quit => self.quit(),
            Command::Cancel => {
                self.guard()?;
                debug!(target: "run", "cancel ignored between runs");
            }
            Command::Select(algorithm) => self.select(algorithm)?,
            Command::Regenerate => self.regenerate()?,
            Command::Resize(delta) => {
                self.resize(delta)?;
            }
            Command::ChangeDelay(delta) => {
                self.change_delay(delta)?;
            }
            Command::Start => {
                self.start(clock)?;
            }
        }
        Ok(self.state)
    }

    /// Refuse anything after quit
    fn guard(&self) -> Result<(), ControlError> {
        if self.state != RunState::Quit {
            return Ok(());
        }
        let refusal = ControlError::SessionEnded;
        warn!(target: "run", %refusal, "command rejected");
        Err(refusal)
    }

    pub fn select(&mut self, algorithm: Algorithm) -> Result<(), ControlError> {
        self.guard()?;
        self.settings.algorithm = algorithm;
        debug!(target: "run", %algorithm, "algorithm selected");
        Ok(())
    }

    /// Shuffle a new permutation; resets counters and settled markers
    pub fn regenerate(&mut self) -> Result<(), ControlError> {
        self.guard()?;
        self.sequence = Sequence::shuffled(self.settings.size(), &mut self.rng);
        self.state = RunState::Idle;
        debug!(target: "run", size = self.sequence.len(), "data regenerated");
        Ok(())
    }

    /// Change the size by `delta` (clamped) and regenerate
    pub fn resize(&mut self, delta: i32) -> Result<usize, ControlError> {
        self.guard()?;
        let size = self.settings.adjust_size(delta);
        self.regenerate()?;
        Ok(size)
    }

    /// Change the per-step delay by `delta` milliseconds (clamped)
    pub fn change_delay(&mut self, delta: i32) -> Result<u64, ControlError> {
        self.guard()?;
        let delay = self.settings.adjust_delay(delta);
        debug!(target: "run", delay_ms = delay, "delay changed");
        Ok(delay)
    }

    pub fn quit(&mut self) {
        if self.state != RunState::Quit {
            info!(target: "run", "quit requested");
        }
        self.state = RunState::Quit;
    }

    /// Run the selected algorithm to a terminal state
    ///
    /// Blocks until the engine completes or the clock reports cancel/quit.
    pub fn start<C: StepClock + ?Sized>(&mut self, clock: &mut C) -> Result<RunState, ControlError> {
        self.guard()?;
        if self.state != RunState::Idle {
            let refusal = ControlError::NeedsFreshData { state: self.state };
            warn!(target: "run", %refusal, "start rejected");
            return Err(refusal);
        }

        clock.begin_run();
        self.sequence.clear_settled();
        self.state = RunState::Running;

        let algorithm = self.settings.algorithm;
        info!(
            target: "run",
            %algorithm,
            size = self.sequence.len(),
            delay_ms = self.settings.delay_ms(),
            "run started"
        );

        let outcome = algorithms::sort(algorithm, &mut self.sequence, &self.settings, clock);
        self.state = match outcome {
            Ok(()) => RunState::Completed,
            Err(Interrupt::Cancel) => RunState::Cancelled,
            Err(Interrupt::Quit) => RunState::Quit,
        };

        let counters = self.sequence.counters();
        info!(
            target: "run",
            %algorithm,
            state = %self.state,
            comparisons = counters.comparisons,
            swaps = counters.swaps,
            "run finished"
        );
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::NullClock;

    fn controller() -> RunController {
        RunController::new(Settings::default(), SeededRng::new(3))
    }

    #[test]
    fn completed_run_requires_fresh_data() {
        let mut ctl = controller();
        let mut clock = NullClock::new();
        assert_eq!(ctl.start(&mut clock), Ok(RunState::Completed));
        assert!(ctl.sequence().is_sorted());
        assert_eq!(
            ctl.start(&mut clock),
            Err(ControlError::NeedsFreshData {
                state: RunState::Completed
            })
        );
        ctl.regenerate().unwrap();
        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.start(&mut clock), Ok(RunState::Completed));
    }

    #[test]
    fn regenerate_resets_counters() {
        let mut ctl = controller();
        ctl.start(&mut NullClock::new()).unwrap();
        assert!(ctl.sequence().counters().comparisons > 0);
        ctl.regenerate().unwrap();
        assert_eq!(ctl.sequence().counters().comparisons, 0);
        assert_eq!(ctl.sequence().counters().swaps, 0);
        assert!(!ctl.sequence().all_settled());
    }

    #[test]
    fn resize_clamps_and_regenerates() {
        let mut ctl = controller();
        assert_eq!(ctl.resize(10), Ok(110));
        assert_eq!(ctl.sequence().len(), 110);
        assert_eq!(ctl.resize(-1000), Ok(crate::config::MIN_SIZE));
        assert_eq!(ctl.sequence().len(), crate::config::MIN_SIZE);
    }

    #[test]
    fn quit_ends_session() {
        let mut ctl = controller();
        let mut clock = NullClock::new();
        assert_eq!(ctl.apply(Command::Quit, &mut clock), Ok(RunState::Quit));
        assert_eq!(
            ctl.apply(Command::Start, &mut clock),
            Err(ControlError::SessionEnded)
        );
        assert_eq!(ctl.regenerate(), Err(ControlError::SessionEnded));
        assert_eq!(ctl.change_delay(5), Err(ControlError::SessionEnded));
    }

    #[test]
    fn apply_routes_settings_commands() {
        let mut ctl = controller();
        let mut clock = NullClock::new();
        ctl.apply(Command::Select(Algorithm::Quick), &mut clock).unwrap();
        ctl.apply(Command::ChangeDelay(-5), &mut clock).unwrap();
        ctl.apply(Command::Cancel, &mut clock).unwrap();
        assert_eq!(ctl.settings().algorithm, Algorithm::Quick);
        assert_eq!(ctl.settings().delay_ms(), 5);
        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.apply(Command::Start, &mut clock), Ok(RunState::Completed));
        assert!(clock.frames() > 0);
    }
}
