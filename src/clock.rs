//! The stepping clock: the single suspension point of a run
//!
//! Engines call [`StepClock::step`] after every comparison and every committed
//! mutation. An implementation renders the frame it is handed, then waits out
//! the configured delay while draining input, and reports any quit/cancel
//! request it saw as a [`Signal`]. Engines turn that into
//! `Result<(), Interrupt>` with [`Signal::check`] and unwind with `?`.
//!
//! [`pace`] is the shared deadline loop used by interactive clocks.

use crate::config::Settings;
use crate::sequence::Sequence;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::time::{Duration, Instant};

/// Control requests observed while a step was being displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signal {
    /// End the whole session
    pub quit: bool,
    /// Abort the current run only
    pub cancel: bool,
}

impl Signal {
    pub const NONE: Signal = Signal {
        quit: false,
        cancel: false,
    };
    pub const QUIT: Signal = Signal {
        quit: true,
        cancel: false,
    };
    pub const CANCEL: Signal = Signal {
        quit: false,
        cancel: true,
    };

    pub fn is_interrupt(self) -> bool {
        self.quit || self.cancel
    }

    /// `Ok` to keep going; quit takes precedence over cancel
    pub fn check(self) -> Result<(), Interrupt> {
        if self.quit {
            Err(Interrupt::Quit)
        } else if self.cancel {
            Err(Interrupt::Cancel)
        } else {
            Ok(())
        }
    }
}

impl BitOr for Signal {
    type Output = Signal;

    fn bitor(self, rhs: Signal) -> Signal {
        Signal {
            quit: self.quit || rhs.quit,
            cancel: self.cancel || rhs.cancel,
        }
    }
}

impl BitOrAssign for Signal {
    fn bitor_assign(&mut self, rhs: Signal) {
        *self = *self | rhs;
    }
}

/// Why an engine stopped before finishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Cancel,
    Quit,
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interrupt::Cancel => write!(f, "cancelled"),
            Interrupt::Quit => write!(f, "quit"),
        }
    }
}

/// Up to two indices to draw in the highlight colour
///
/// Indices outside the sequence are ignored by renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl Highlights {
    pub const NONE: Highlights = Highlights {
        first: None,
        second: None,
    };

    pub fn pair(first: usize, second: usize) -> Self {
        Highlights {
            first: Some(first),
            second: Some(second),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub sequence: &'a Sequence,
    pub highlights: Highlights,
    pub settings: &'a Settings,
}

/// Renders a step, waits the step delay and reports control requests
pub trait StepClock {
    fn step(&mut self, view: &FrameView<'_>) -> Signal;

    /// Called before a run starts; clears a latched cancel request
    fn begin_run(&mut self) {}
}

impl<C: StepClock + ?Sized> StepClock for &mut C {
    fn step(&mut self, view: &FrameView<'_>) -> Signal {
        (**self).step(view)
    }

    fn begin_run(&mut self) {
        (**self).begin_run()
    }
}

/// Wait until `delay` has elapsed since the call, draining input meanwhile
///
/// `drain` receives the time left and may block up to that long waiting for
/// input; it returns whatever control requests it consumed. The loop ends
/// early on the first quit or cancel. With a zero delay input is drained
/// exactly once.
pub fn pace<F>(delay: Duration, mut drain: F) -> Signal
where
    F: FnMut(Duration) -> Signal,
{
    let start = Instant::now();
    let mut signal = Signal::NONE;
    loop {
        let remaining = delay.saturating_sub(start.elapsed());
        signal |= drain(remaining);
        if signal.is_interrupt() || start.elapsed() >= delay {
            return signal;
        }
    }
}

/// A clock that draws nothing, never waits and never interrupts
#[derive(Debug, Default)]
pub struct NullClock {
    frames: u64,
}

impl NullClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps taken so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl StepClock for NullClock {
    fn step(&mut self, _view: &FrameView<'_>) -> Signal {
        self.frames += 1;
        Signal::NONE
    }
}
