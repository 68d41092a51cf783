// Engine behavior: scenarios, counts, settle rules and cancellation

mod common;

use common::{is_permutation_of, RecordingClock};
use sortty::algorithms::{sort, Algorithm};
use sortty::clock::{Highlights, Interrupt, NullClock};
use sortty::config::Settings;
use sortty::sequence::Sequence;

fn run_with(
    algorithm: Algorithm,
    values: &[u32],
    clock: &mut RecordingClock,
) -> (Sequence, Result<(), Interrupt>) {
    let mut seq = Sequence::from_values(values.to_vec());
    let settings = Settings::default();
    let result = sort(algorithm, &mut seq, &settings, clock);
    (seq, result)
}

#[test]
fn test_bubble_scenario() {
    let mut clock = RecordingClock::new();
    let (seq, result) = run_with(Algorithm::Bubble, &[3, 1, 4, 5, 2], &mut clock);

    assert_eq!(result, Ok(()));
    assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
    assert_eq!(seq.counters().comparisons, 10);
    assert_eq!(seq.settled(), &[true; 5]);
}

#[test]
fn test_selection_scenario() {
    let mut clock = RecordingClock::new();
    let (seq, result) = run_with(Algorithm::Selection, &[3, 1, 4, 5, 2], &mut clock);

    assert_eq!(result, Ok(()));
    assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
    assert_eq!(seq.counters().comparisons, 10);
    assert!(seq.all_settled());
}

#[test]
fn test_bubble_cancel_after_first_comparison() {
    // The first step shows the comparison, the second the swap it caused
    let mut clock = RecordingClock::cancel_at(2);
    let (seq, result) = run_with(Algorithm::Bubble, &[5, 4, 3, 2, 1], &mut clock);

    assert_eq!(result, Err(Interrupt::Cancel));
    assert_eq!(seq.values(), &[4, 5, 3, 2, 1]);
    assert_eq!(seq.counters().comparisons, 1);
    assert_eq!(seq.counters().swaps, 1);
    assert_eq!(clock.steps(), 2);
}

#[test]
fn test_cancel_on_comparison_step_skips_the_swap() {
    let mut clock = RecordingClock::cancel_at(1);
    let (seq, result) = run_with(Algorithm::Bubble, &[5, 4, 3, 2, 1], &mut clock);

    assert_eq!(result, Err(Interrupt::Cancel));
    assert_eq!(seq.values(), &[5, 4, 3, 2, 1]);
    assert_eq!(seq.counters().comparisons, 1);
    assert_eq!(seq.counters().swaps, 0);
}

#[test]
fn test_merge_scenario() {
    let mut clock = RecordingClock::new();
    let (seq, result) = run_with(Algorithm::Merge, &[5, 3, 8, 4, 2, 7], &mut clock);

    assert_eq!(result, Ok(()));
    assert_eq!(seq.values(), &[2, 3, 4, 5, 7, 8]);
    assert!(seq.all_settled());

    // Each merge settles its own range; only the top-level merge covers
    // 0..6 and it is the final step
    let mut newly_settled = Vec::new();
    let mut previous = vec![false; 6];
    for frame in &clock.frames {
        let fresh: Vec<usize> = (0..6).filter(|&i| frame.settled[i] && !previous[i]).collect();
        if !fresh.is_empty() {
            newly_settled.push(fresh);
        }
        previous = frame.settled.clone();
    }
    assert_eq!(
        newly_settled,
        vec![vec![0, 1], vec![2], vec![3, 4], vec![5]]
    );
    assert_eq!(
        clock.frames.last().unwrap().highlights,
        Highlights::pair(5, 5)
    );
    assert_eq!(clock.frames.last().unwrap().values, vec![2, 3, 4, 5, 7, 8]);
}

#[test]
fn test_merge_counts_every_write() {
    let mut clock = RecordingClock::new();
    let (seq, _) = run_with(Algorithm::Merge, &[2, 1, 4, 3], &mut clock);

    // Merges of sizes 2, 2 and 4 each write their whole range
    assert_eq!(seq.counters().swaps, 8);
    assert_eq!(seq.counters().comparisons, 1 + 1 + 2);
}

#[test]
fn test_fixed_comparison_counts() {
    let cases: [Vec<u32>; 3] = [
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![7, 6, 5, 4, 3, 2, 1],
        vec![4, 7, 1, 3, 6, 2, 5],
    ];
    for values in cases {
        for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
            let (seq, _) = run_with(algorithm, &values, &mut RecordingClock::new());
            assert_eq!(seq.counters().comparisons, 21, "{} on {:?}", algorithm, values);
        }
    }
}

#[test]
fn test_insertion_counts_follow_inversions() {
    let (sorted, _) = run_with(Algorithm::Insertion, &[1, 2, 3, 4], &mut RecordingClock::new());
    assert_eq!(sorted.counters().comparisons, 3);
    assert_eq!(sorted.counters().swaps, 0);

    let (reversed, _) = run_with(Algorithm::Insertion, &[4, 3, 2, 1], &mut RecordingClock::new());
    assert_eq!(reversed.values(), &[1, 2, 3, 4]);
    assert_eq!(reversed.counters().comparisons, 6);
    assert_eq!(reversed.counters().swaps, 6);
}

#[test]
fn test_insertion_highlights() {
    let mut clock = RecordingClock::new();
    run_with(Algorithm::Insertion, &[2, 1], &mut clock);

    let highlights: Vec<Highlights> = clock.frames.iter().map(|f| f.highlights).collect();
    assert_eq!(
        highlights,
        vec![
            Highlights::pair(0, 1), // compare a[0] with the key
            Highlights::pair(0, 1), // shift
            Highlights::pair(0, 1), // key placed at 0, prefix settled
        ]
    );
    assert!(clock.frames[2].settled.iter().all(|&s| s));
}

#[test]
fn test_selection_step_sequence() {
    let mut clock = RecordingClock::new();
    let (seq, _) = run_with(Algorithm::Selection, &[3, 1, 2], &mut clock);

    let highlights: Vec<Highlights> = clock.frames.iter().map(|f| f.highlights).collect();
    assert_eq!(
        highlights,
        vec![
            Highlights::pair(0, 1),
            Highlights::pair(1, 2),
            Highlights::pair(0, 1), // swap 3 <-> 1, settle 0
            Highlights::pair(1, 2),
            Highlights::pair(1, 2), // swap 3 <-> 2, settle 1
            Highlights::pair(2, 2), // last index settled by elimination
        ]
    );
    assert_eq!(seq.counters().swaps, 2);
}

#[test]
fn test_quick_settles_pivots() {
    let mut clock = RecordingClock::new();
    let (seq, result) = run_with(Algorithm::Quick, &[3, 5, 1, 4, 2], &mut clock);

    assert_eq!(result, Ok(()));
    assert_eq!(seq.values(), &[1, 2, 3, 4, 5]);
    assert!(seq.all_settled());

    // First partition: pivot 2 lands in slot 1
    let first_settle = clock
        .frames
        .iter()
        .find(|f| f.settled.iter().any(|&s| s))
        .unwrap();
    assert_eq!(first_settle.settled, vec![false, true, false, false, false]);
    assert_eq!(first_settle.highlights, Highlights::pair(1, 4));
}

#[test]
fn test_quit_propagates_through_recursion() {
    for algorithm in [Algorithm::Merge, Algorithm::Quick] {
        let values = [9, 3, 7, 1, 8, 2, 6, 4, 5, 10];
        let mut clock = RecordingClock::quit_at(7);
        let (seq, result) = run_with(algorithm, &values, &mut clock);

        assert_eq!(result, Err(Interrupt::Quit), "{}", algorithm);
        assert_eq!(clock.steps(), 7, "{} kept stepping after quit", algorithm);
        assert!(is_permutation_of(seq.values(), &values));
    }
}

#[test]
fn test_merge_cancel_mid_merge_keeps_permutation() {
    let values = [4, 3, 2, 1];
    // Steps: compare(0,1), write, write, settle [0,1]; compare(2,3), ...
    // Cancel on the first write of the first merge
    let mut clock = RecordingClock::cancel_at(2);
    let (seq, result) = run_with(Algorithm::Merge, &values, &mut clock);

    assert_eq!(result, Err(Interrupt::Cancel));
    assert_eq!(seq.values(), &[3, 4, 2, 1]);
    assert_eq!(seq.counters().swaps, 1);
    assert!(!seq.is_settled(0));
}

#[test]
fn test_merge_frames_never_duplicate_a_value() {
    let mut clock = RecordingClock::new();
    run_with(Algorithm::Merge, &[2, 1], &mut clock);
    // compare, write 1, write 2, settle
    assert_eq!(clock.frames[0].values, vec![2, 1]);
    assert_eq!(clock.frames[1].values, vec![1, 2]);
    assert_eq!(clock.frames[1].counters.swaps, 1);

    let values = [3, 7, 1, 8, 5, 2, 6, 4];
    let mut clock = RecordingClock::new();
    run_with(Algorithm::Merge, &values, &mut clock);
    for (index, frame) in clock.frames.iter().enumerate() {
        assert!(
            is_permutation_of(&frame.values, &values),
            "frame {}: {:?}",
            index,
            frame.values
        );
    }
}

#[test]
fn test_insertion_cancel_mid_shift_keeps_permutation() {
    let values = [2, 3, 4, 1];
    let mut clock = RecordingClock::new();
    run_with(Algorithm::Insertion, &values, &mut clock);
    let total = clock.steps();

    for stop in 1..=total {
        let mut clock = RecordingClock::cancel_at(stop);
        let (seq, _) = run_with(Algorithm::Insertion, &values, &mut clock);
        assert!(is_permutation_of(seq.values(), &values), "stop at {}", stop);
        for frame in &clock.frames {
            assert!(is_permutation_of(&frame.values, &values));
        }
    }
}

#[test]
fn test_every_frame_is_consistent() {
    let values = [6, 2, 9, 1, 5, 3, 8, 7, 4, 10];
    for algorithm in Algorithm::ALL {
        let mut clock = RecordingClock::new();
        let (seq, result) = run_with(algorithm, &values, &mut clock);
        assert_eq!(result, Ok(()));
        assert!(seq.is_sorted() && seq.all_settled(), "{}", algorithm);

        let mut previous = clock.frames[0].clone();
        for frame in &clock.frames[1..] {
            assert!(is_permutation_of(&frame.values, &values));
            assert!(frame.counters.comparisons >= previous.counters.comparisons);
            assert!(frame.counters.swaps >= previous.counters.swaps);
            // at most one comparison or one relocation per frame
            let delta = (frame.counters.comparisons - previous.counters.comparisons)
                + (frame.counters.swaps - previous.counters.swaps);
            assert!(delta <= 1, "{} advanced {} events in one frame", algorithm, delta);
            for (was, now) in previous.settled.iter().zip(&frame.settled) {
                assert!(!was || *now, "{} unsettled an index", algorithm);
            }
            previous = frame.clone();
        }
    }
}

#[test]
fn test_tiny_sequences() {
    for algorithm in Algorithm::ALL {
        let mut empty = Sequence::from_values(vec![]);
        let mut clock = NullClock::new();
        assert_eq!(sort(algorithm, &mut empty, &Settings::default(), &mut clock), Ok(()));
        assert_eq!(clock.frames(), 0);

        let mut single = Sequence::from_values(vec![1]);
        assert_eq!(sort(algorithm, &mut single, &Settings::default(), &mut clock), Ok(()));
        assert!(single.all_settled(), "{}", algorithm);
        assert_eq!(single.counters().comparisons, 0);

        let mut pair = Sequence::from_values(vec![2, 1]);
        sort(algorithm, &mut pair, &Settings::default(), &mut clock).unwrap();
        assert_eq!(pair.values(), &[1, 2]);
        assert!(pair.all_settled(), "{}", algorithm);
    }
}
