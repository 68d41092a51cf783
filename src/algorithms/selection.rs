//! Selection sort
//!
//! For each `i` in `0..n-1` the minimum of `a[i..]` is found with one
//! comparison per candidate and swapped into `i`, which is then settled.
//! Always `n(n-1)/2` comparisons. The last index is settled by elimination.

use super::Stepper;
use crate::clock::{Interrupt, StepClock};

pub fn run<C: StepClock + ?Sized>(s: &mut Stepper<'_, C>) -> Result<(), Interrupt> {
    let n = s.seq.len();
    if n == 0 {
        return Ok(());
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            s.compared(min_index, j)?;
            if s.seq.get(j) < s.seq.get(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            s.seq.swap(i, min_index);
        }
        s.seq.settle(i);
        s.step(i, min_index)?;
    }

    s.settle(n - 1)
}
