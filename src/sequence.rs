//! Sequence state shared by every sorting engine
//!
//! A [`Sequence`] holds the values being sorted, one settled marker per index
//! and the running [`Counters`]. Engines mutate it only through the
//! crate-private operations below, so every relocation is counted and the
//! values always remain a permutation of what the sequence was built with.

use crate::rng::SeededRng;
use std::ops::Range;

/// Running comparison and relocation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    /// Element relocations: swaps, shifts and merge writes
    pub swaps: u64,
}

/// The array under visualization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u32>,
    settled: Vec<bool>,
    counters: Counters,
}

impl Sequence {
    /// Build a sequence from explicit values, with fresh markers and counters
    pub fn from_values(values: Vec<u32>) -> Self {
        let settled = vec![false; values.len()];
        Sequence {
            values,
            settled,
            counters: Counters::default(),
        }
    }

    /// The permutation `1..=len` shuffled with `rng`
    pub fn shuffled(len: usize, rng: &mut SeededRng) -> Self {
        let mut values: Vec<u32> = (1..=len as u32).collect();
        rng.shuffle(&mut values);
        Self::from_values(values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn settled(&self) -> &[bool] {
        &self.settled
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn is_settled(&self, index: usize) -> bool {
        self.settled.get(index).copied().unwrap_or(false)
    }

    pub fn all_settled(&self) -> bool {
        self.settled.iter().all(|&s| s)
    }

    /// Check ascending order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    pub(crate) fn get(&self, index: usize) -> u32 {
        self.values[index]
    }

    pub(crate) fn record_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Exchange two positions, counted as one relocation
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.counters.swaps += 1;
    }

    /// Overwrite one position, counted as one relocation
    ///
    /// Callers must keep the displaced value somewhere they will write back.
    pub(crate) fn write(&mut self, index: usize, value: u32) {
        self.values[index] = value;
        self.counters.swaps += 1;
    }

    /// Copy `values` into consecutive positions starting at `start` without
    /// touching the counters
    pub(crate) fn restore(&mut self, start: usize, values: &[u32]) {
        self.values[start..start + values.len()].copy_from_slice(values);
    }

    pub(crate) fn settle(&mut self, index: usize) {
        self.settled[index] = true;
    }

    pub(crate) fn settle_range(&mut self, range: Range<usize>) {
        for marker in &mut self.settled[range] {
            *marker = true;
        }
    }

    /// Reset settled markers at the start of a run. Counters are kept.
    pub(crate) fn clear_settled(&mut self) {
        self.settled.iter_mut().for_each(|s| *s = false);
    }
}
