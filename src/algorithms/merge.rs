//! Top-down merge sort
//!
//! Ranges are split at `(l + r) / 2` (inclusive bounds) down to single
//! elements. A merge copies both halves into scratch buffers and writes them
//! back interleaved: one comparison per decision, one counted write per
//! element placed, tail copies included. When a merge finishes its whole
//! range is settled, so the full array is settled once, by the top-level
//! merge.
//!
//! After every placed element the unwritten tail of the range is refilled
//! from the buffers (uncounted), so each frame shows a permutation and an
//! interrupt can unwind straight away.

use super::Stepper;
use crate::clock::{Interrupt, StepClock};
use crate::sequence::Sequence;

pub fn run<C: StepClock + ?Sized>(s: &mut Stepper<'_, C>) -> Result<(), Interrupt> {
    match s.seq.len() {
        0 => Ok(()),
        1 => s.settle(0),
        n => sort_range(s, 0, n),
    }
}

/// Sort the half-open range `lo..hi`
fn sort_range<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    lo: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = (lo + hi - 1) / 2 + 1;
    sort_range(s, lo, mid)?;
    sort_range(s, mid, hi)?;
    merge(s, lo, mid, hi)
}

/// Scratch state of one merge
struct Merge {
    left: Vec<u32>,
    right: Vec<u32>,
    i: usize,
    j: usize,
    dest: usize,
}

impl Merge {
    /// Lay the unplaced elements out from `dest` to the end of the range
    fn refill(&self, seq: &mut Sequence) {
        let rest_left = &self.left[self.i..];
        seq.restore(self.dest, rest_left);
        seq.restore(self.dest + rest_left.len(), &self.right[self.j..]);
    }
}

fn merge<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    let mut m = Merge {
        left: s.seq.values()[lo..mid].to_vec(),
        right: s.seq.values()[mid..hi].to_vec(),
        i: 0,
        j: 0,
        dest: lo,
    };

    interleave(s, &mut m, lo, mid)?;
    s.seq.settle_range(lo..hi);
    s.step(hi - 1, hi - 1)
}

fn interleave<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    m: &mut Merge,
    lo: usize,
    mid: usize,
) -> Result<(), Interrupt> {
    while m.i < m.left.len() && m.j < m.right.len() {
        s.compared(lo + m.i, mid + m.j)?;
        let value = if m.left[m.i] <= m.right[m.j] {
            m.i += 1;
            m.left[m.i - 1]
        } else {
            m.j += 1;
            m.right[m.j - 1]
        };
        place(s, m, value)?;
    }

    while m.i < m.left.len() {
        let value = m.left[m.i];
        m.i += 1;
        place(s, m, value)?;
    }
    while m.j < m.right.len() {
        let value = m.right[m.j];
        m.j += 1;
        place(s, m, value)?;
    }

    Ok(())
}

fn place<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    m: &mut Merge,
    value: u32,
) -> Result<(), Interrupt> {
    s.seq.write(m.dest, value);
    m.dest += 1;
    m.refill(s.seq);
    s.step(m.dest - 1, m.dest - 1)
}
