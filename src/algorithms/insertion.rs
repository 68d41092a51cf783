//! Insertion sort
//!
//! For each `i` in `1..n` the key `a[i]` is carried left while the value in
//! front of it is larger. A shift exchanges that larger value with the key,
//! which moves it one slot right exactly like a plain shift would while the
//! key travels with the hole; the array therefore stays a permutation even if
//! the run is cancelled mid-shift. After each insertion the prefix `0..=i`
//! is settled.

use super::Stepper;
use crate::clock::{Interrupt, StepClock};

pub fn run<C: StepClock + ?Sized>(s: &mut Stepper<'_, C>) -> Result<(), Interrupt> {
    let n = s.seq.len();
    if n == 1 {
        return s.settle(0);
    }

    for i in 1..n {
        let key = s.seq.get(i);
        // Where the key currently sits; `slot - 1` is the `j` being compared
        let mut slot = i;

        while slot > 0 {
            let j = slot - 1;
            s.compared(j, i)?;
            if s.seq.get(j) <= key {
                break;
            }
            s.seq.swap(j, slot);
            s.step(j, slot)?;
            slot = j;
        }

        s.seq.settle_range(0..i + 1);
        s.step(slot, i)?;
    }

    Ok(())
}
