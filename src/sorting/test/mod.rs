//! Tests for the instrumented sorting algorithms.

use super::SortAlgorithm;
use crate::steps::{Snapshot, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

fn run(algo: SortAlgorithm, input: &[Value]) -> Vec<Snapshot> {
    let mut data = input.to_vec();
    let steps = algo.record(&mut data);
    assert_eq!(
        steps.last(),
        Some(&data),
        "{}: last snapshot should match the sorted slice",
        algo.name()
    );
    steps
}

/// Number of positions where two snapshots differ.
fn changed_positions(a: &[Value], b: &[Value]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[test]
fn test_bubble_scenario() {
    let steps = run(SortAlgorithm::Bubble, &[5, 3, 8, 1]);
    assert_eq!(steps.first().unwrap(), &vec![5, 3, 8, 1]);
    assert_eq!(steps.last().unwrap(), &vec![1, 3, 5, 8]);
}

#[test]
fn test_quick_scenario() {
    let steps = run(SortAlgorithm::Quick, &[5, 3, 8, 1]);
    assert_eq!(steps.first().unwrap(), &vec![5, 3, 8, 1]);
    assert_eq!(steps.last().unwrap(), &vec![1, 3, 5, 8]);
}

#[test]
fn test_all_equal_input() {
    for algo in SortAlgorithm::ALL {
        let steps = run(algo, &[4, 4, 4]);
        assert_eq!(steps.last().unwrap(), &vec![4, 4, 4], "{}", algo.name());
    }
}

#[test]
fn test_empty_input_yields_single_snapshot() {
    for algo in SortAlgorithm::ALL {
        let steps = run(algo, &[]);
        assert_eq!(steps, vec![Vec::<Value>::new()], "{}", algo.name());
    }
}

#[test]
fn test_single_element() {
    for algo in SortAlgorithm::ALL {
        let steps = run(algo, &[42]);
        assert_eq!(steps, vec![vec![42]], "{}", algo.name());
    }
}

#[test]
fn test_already_sorted_input_needs_no_swaps() {
    let input = [1, 2, 3, 4, 5];
    for algo in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
    ] {
        let steps = run(algo, &input);
        assert_eq!(steps.len(), 1, "{}: no state change expected", algo.name());
    }
}

#[test]
fn test_negative_values() {
    let input = [-3, 10, 0, -250, 7, -3, 99];
    let expected = sorted_copy(&input);
    for algo in SortAlgorithm::ALL {
        let steps = run(algo, &input);
        assert_eq!(steps.last().unwrap(), &expected, "{}", algo.name());
    }
}

#[test]
fn test_extreme_values_radix() {
    let input = [Value::MAX, Value::MIN, 0, -1, 1];
    let steps = run(SortAlgorithm::Radix, &input);
    assert_eq!(steps.last().unwrap(), &sorted_copy(&input));
}

#[test]
fn test_radix_captures_once_per_digit_pass() {
    // Keys are offset by the minimum (2): max key 998 has three digits
    let steps = run(SortAlgorithm::Radix, &[170, 2, 1000, 45, 802]);
    assert_eq!(steps.len(), 1 + 3);
    assert_eq!(steps.last().unwrap(), &vec![2, 45, 170, 802, 1000]);
}

#[test]
fn test_random_inputs_sorted_and_permuted() {
    let mut rng = StdRng::seed_from_u64(7);

    for algo in SortAlgorithm::ALL {
        for _ in 0..50 {
            let size = rng.random_range(0..40);
            let input: Vec<Value> = (0..size).map(|_| rng.random_range(-100..=100)).collect();
            let steps = run(algo, &input);

            assert_eq!(steps.first().unwrap(), &input, "{}: first snapshot", algo.name());
            assert_eq!(
                steps.last().unwrap(),
                &sorted_copy(&input),
                "{}: final snapshot for {:?}",
                algo.name(),
                input
            );
        }
    }
}

#[test]
fn test_swap_based_steps_change_exactly_two_positions() {
    let mut rng = StdRng::seed_from_u64(11);

    for algo in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Quick,
    ] {
        let input: Vec<Value> = (0..30).map(|_| rng.random_range(0..50)).collect();
        let steps = run(algo, &input);
        let expected_multiset = sorted_copy(&input);

        for pair in steps.windows(2) {
            assert_eq!(
                changed_positions(&pair[0], &pair[1]),
                2,
                "{}: each step should be one swap",
                algo.name()
            );
            assert_eq!(sorted_copy(&pair[1]), expected_multiset, "{}", algo.name());
        }
    }
}

#[test]
fn test_write_based_steps_change_at_most_one_position() {
    let mut rng = StdRng::seed_from_u64(13);

    for algo in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
        let input: Vec<Value> = (0..30).map(|_| rng.random_range(0..50)).collect();
        let steps = run(algo, &input);

        for pair in steps.windows(2) {
            assert!(
                changed_positions(&pair[0], &pair[1]) <= 1,
                "{}: each step should write one element",
                algo.name()
            );
        }
    }
}

#[test]
fn test_insertion_shift_then_insert() {
    let steps = run(SortAlgorithm::Insertion, &[2, 1]);
    // shift 2 right, then insert 1
    assert_eq!(steps, vec![vec![2, 1], vec![2, 2], vec![1, 2]]);
}

#[test]
fn test_bubble_step_trace() {
    let steps = run(SortAlgorithm::Bubble, &[3, 2, 1]);
    assert_eq!(
        steps,
        vec![vec![3, 2, 1], vec![2, 3, 1], vec![2, 1, 3], vec![1, 2, 3]]
    );
}

#[test]
fn test_merge_is_stable_on_duplicates() {
    let input = [5, 1, 5, 1, 5];
    let steps = run(SortAlgorithm::Merge, &input);
    assert_eq!(steps.last().unwrap(), &vec![1, 1, 5, 5, 5]);
}

#[test]
fn test_verify_all() {
    for algo in SortAlgorithm::ALL {
        algo.verify().expect("verification should pass");
    }
}
