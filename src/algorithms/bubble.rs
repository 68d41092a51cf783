//! Exchange-pass (bubble) sort
//!
//! Pass `i` walks `j` over `0..n-i-1`, comparing and, when out of order,
//! swapping the neighbours `j` and `j+1`. Each pass carries the largest
//! remaining value to index `n-i-1`, which is then settled. There is no
//! early exit, so a run always makes `n(n-1)/2` comparisons. Index 0 is
//! settled by elimination after the last pass.

use super::Stepper;
use crate::clock::{Interrupt, StepClock};

pub fn run<C: StepClock + ?Sized>(s: &mut Stepper<'_, C>) -> Result<(), Interrupt> {
    let n = s.seq.len();
    if n == 0 {
        return Ok(());
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            s.compared(j, j + 1)?;
            if s.seq.get(j) > s.seq.get(j + 1) {
                s.seq.swap(j, j + 1);
                s.step(j, j + 1)?;
            }
        }
        s.settle(n - i - 1)?;
    }

    s.settle(0)
}
