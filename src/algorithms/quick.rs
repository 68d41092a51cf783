//! Partition-based (quick) sort
//!
//! Lomuto partition with `a[r]` as the pivot: every smaller element is
//! swapped into the low region, then the pivot is swapped into its final
//! slot, which is settled. Subranges of a single element are already final
//! and get settled when the recursion reaches them.

use super::Stepper;
use crate::clock::{Interrupt, StepClock};

pub fn run<C: StepClock + ?Sized>(s: &mut Stepper<'_, C>) -> Result<(), Interrupt> {
    let n = s.seq.len();
    sort_range(s, 0, n)
}

/// Sort the half-open range `lo..hi`
fn sort_range<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    lo: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    match hi - lo {
        0 => Ok(()),
        1 => s.settle(lo),
        _ => {
            let slot = partition(s, lo, hi - 1)?;
            sort_range(s, lo, slot)?;
            sort_range(s, slot + 1, hi)
        }
    }
}

/// Partition `l..=r` around `a[r]`, returning the pivot's final index
fn partition<C: StepClock + ?Sized>(
    s: &mut Stepper<'_, C>,
    l: usize,
    r: usize,
) -> Result<usize, Interrupt> {
    let pivot = s.seq.get(r);
    let mut low = l;

    for j in l..r {
        s.compared(j, r)?;
        if s.seq.get(j) < pivot {
            s.seq.swap(low, j);
            s.step(low, j)?;
            low += 1;
        }
    }

    s.seq.swap(low, r);
    s.seq.settle(low);
    s.step(low, r)?;
    Ok(low)
}
