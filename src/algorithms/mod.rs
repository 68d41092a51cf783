//! Instrumented, interruptible sorting engines
//!
//! Each engine sorts a [`Sequence`] in place and calls the stepping clock
//! after every comparison and every committed mutation:
//!
//! - [`bubble`]: exchange passes, settling the tail one index per pass
//! - [`insertion`]: carries each key down into the sorted prefix
//! - [`selection`]: selects the minimum of the unsorted suffix
//! - [`merge`]: top-down merge sort through scratch buffers
//! - [`quick`]: Lomuto partitioning around the last element
//!
//! # Cooperative cancellation
//!
//! Every step returns `Result<(), Interrupt>`; engines propagate it with `?`
//! so nothing further is compared, moved or settled once a quit or cancel has
//! been seen. Mutations already committed stay in place.
//!
//! # Settled markers
//!
//! Settling is a visualization hint tied to each engine's own invariant and
//! documented per module. Indices an engine's rule leaves unmarked are settled
//! by elimination at the very end, so a completed run has every marker set.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::clock::{FrameView, Highlights, Interrupt, StepClock};
use crate::config::Settings;
use crate::sequence::Sequence;
use std::fmt;
use std::str::FromStr;

/// The five visualized algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Insertion => "Insertion",
            Algorithm::Selection => "Selection",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// An engine's handle on the run: the borrowed sequence plus the clock
pub struct Stepper<'a, C: StepClock + ?Sized> {
    pub(crate) seq: &'a mut Sequence,
    settings: &'a Settings,
    clock: &'a mut C,
}

impl<'a, C: StepClock + ?Sized> Stepper<'a, C> {
    pub fn new(seq: &'a mut Sequence, settings: &'a Settings, clock: &'a mut C) -> Self {
        Stepper {
            seq,
            settings,
            clock,
        }
    }

    /// Show the current state with `first` and `second` highlighted
    pub(crate) fn step(&mut self, first: usize, second: usize) -> Result<(), Interrupt> {
        let view = FrameView {
            sequence: &*self.seq,
            highlights: Highlights::pair(first, second),
            settings: self.settings,
        };
        let signal = self.clock.step(&view);
        tracing::trace!(
            target: "step",
            first,
            second,
            comparisons = self.seq.counters().comparisons,
            swaps = self.seq.counters().swaps,
            "frame"
        );
        signal.check()
    }

    /// Count a comparison and show it
    pub(crate) fn compared(&mut self, first: usize, second: usize) -> Result<(), Interrupt> {
        self.seq.record_comparison();
        self.step(first, second)
    }

    /// Mark `index` settled and show it
    pub(crate) fn settle(&mut self, index: usize) -> Result<(), Interrupt> {
        self.seq.settle(index);
        self.step(index, index)
    }
}

/// Sort `sequence` with `algorithm`, stepping `clock` along the way
pub fn sort<C: StepClock + ?Sized>(
    algorithm: Algorithm,
    sequence: &mut Sequence,
    settings: &Settings,
    clock: &mut C,
) -> Result<(), Interrupt> {
    let mut stepper = Stepper::new(sequence, settings, clock);
    match algorithm {
        Algorithm::Bubble => bubble::run(&mut stepper),
        Algorithm::Insertion => insertion::run(&mut stepper),
        Algorithm::Selection => selection::run(&mut stepper),
        Algorithm::Merge => merge::run(&mut stepper),
        Algorithm::Quick => quick::run(&mut stepper),
    }
}
