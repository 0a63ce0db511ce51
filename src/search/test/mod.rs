//! Tests for linear search.

use super::{display_index, SearchAlgorithm, NOT_FOUND};
use crate::steps::Probe;

#[test]
fn test_target_present() {
    let (found, probes) = SearchAlgorithm::Linear.record(&[10, 20, 30], 20);
    assert_eq!(found, Some(1));
    assert_eq!(probes, vec![Probe::new(0, false), Probe::new(1, true)]);
}

#[test]
fn test_target_absent() {
    let (found, probes) = SearchAlgorithm::Linear.record(&[10, 20, 30], 99);
    assert_eq!(found, None);
    assert_eq!(display_index(found), NOT_FOUND);
    assert_eq!(
        probes,
        vec![
            Probe::new(0, false),
            Probe::new(1, false),
            Probe::new(2, false)
        ]
    );
}

#[test]
fn test_first_match_wins() {
    let (found, probes) = SearchAlgorithm::Linear.record(&[7, 1, 7], 7);
    assert_eq!(found, Some(0));
    assert_eq!(probes, vec![Probe::new(0, true)]);
}

#[test]
fn test_empty_sequence() {
    let (found, probes) = SearchAlgorithm::Linear.record(&[], 5);
    assert_eq!(found, None);
    assert!(probes.is_empty());
}

#[test]
fn test_prior_probes_unmatched() {
    let data = [4, 8, 15, 16, 23, 42];
    let (found, probes) = SearchAlgorithm::Linear.record(&data, 23);
    assert_eq!(found, Some(4));
    assert_eq!(probes.len(), 5);
    assert!(probes[..4].iter().all(|p| !p.matched));
    assert_eq!(probes[4], Probe::new(4, true));
    assert_eq!(display_index(found), 4);
}

#[test]
fn test_verify() {
    SearchAlgorithm::Linear
        .verify()
        .expect("linear search should pass verification");
}
