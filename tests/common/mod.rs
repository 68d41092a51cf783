// Scripted stepping clocks shared by the integration tests

#![allow(dead_code)]

use sortty::clock::{FrameView, Highlights, Signal, StepClock};
use sortty::sequence::Counters;

/// One captured step
#[derive(Debug, Clone)]
pub struct Frame {
    pub values: Vec<u32>,
    pub settled: Vec<bool>,
    pub counters: Counters,
    pub highlights: Highlights,
}

/// Records every frame; optionally raises a signal from step `n` (1-based) on
pub struct RecordingClock {
    pub frames: Vec<Frame>,
    interrupt_at: Option<(usize, Signal)>,
    latched: Signal,
    pub runs_started: usize,
}

impl RecordingClock {
    pub fn new() -> Self {
        RecordingClock {
            frames: Vec::new(),
            interrupt_at: None,
            latched: Signal::NONE,
            runs_started: 0,
        }
    }

    pub fn cancel_at(step: usize) -> Self {
        RecordingClock {
            interrupt_at: Some((step, Signal::CANCEL)),
            ..Self::new()
        }
    }

    pub fn quit_at(step: usize) -> Self {
        RecordingClock {
            interrupt_at: Some((step, Signal::QUIT)),
            ..Self::new()
        }
    }

    /// Pretend a cancel is already pending before the run begins
    pub fn with_pending_cancel() -> Self {
        RecordingClock {
            latched: Signal::CANCEL,
            ..Self::new()
        }
    }

    pub fn steps(&self) -> usize {
        self.frames.len()
    }
}

impl StepClock for RecordingClock {
    fn step(&mut self, view: &FrameView<'_>) -> Signal {
        self.frames.push(Frame {
            values: view.sequence.values().to_vec(),
            settled: view.sequence.settled().to_vec(),
            counters: view.sequence.counters(),
            highlights: view.highlights,
        });
        if let Some((at, signal)) = self.interrupt_at {
            if self.frames.len() >= at {
                self.latched |= signal;
            }
        }
        self.latched
    }

    fn begin_run(&mut self) {
        self.latched.cancel = false;
        self.runs_started += 1;
    }
}

pub fn is_permutation_of(values: &[u32], original: &[u32]) -> bool {
    let mut a = values.to_vec();
    let mut b = original.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
