//! # Sorting Algorithms
//!
//! Textbook in-place sorts instrumented to report every state change to a
//! [`SnapshotSink`]:
//!
//! - **Bubble**: adjacent swaps, early exit on a swap-free pass
//! - **Insertion**: shifts larger elements right, then inserts the key
//! - **Selection**: swaps the minimum of the unsorted suffix into place
//! - **Merge**: top-down, one capture per element written back
//! - **Quick**: Lomuto partition, last element as pivot
//! - **Radix**: LSD base 10, one capture per digit pass

pub mod code;
#[cfg(test)]
pub mod test;

use crate::steps::{Snapshot, SnapshotRecorder, SnapshotSink, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Radix,
    ];

    /// Display name (e.g., "Bubble Sort")
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Radix => "Radix Sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Repeated adjacent compare-and-swap passes",
            SortAlgorithm::Insertion => "Shifts larger elements right and inserts each key",
            SortAlgorithm::Selection => "Swaps the minimum of the unsorted suffix into place",
            SortAlgorithm::Merge => "Recursively sorts halves and merges them",
            SortAlgorithm::Quick => "Partitions around the last element and recurses",
            SortAlgorithm::Radix => "Least-significant-digit counting passes, base 10",
        }
    }

    /// Sort `data` in place, reporting every state change to `sink`.
    pub fn run(self, data: &mut [Value], sink: &mut dyn SnapshotSink) {
        match self {
            SortAlgorithm::Bubble => code::bubble_sort(data, sink),
            SortAlgorithm::Insertion => code::insertion_sort(data, sink),
            SortAlgorithm::Selection => code::selection_sort(data, sink),
            SortAlgorithm::Merge => code::merge_sort(data, sink),
            SortAlgorithm::Quick => code::quick_sort(data, sink),
            SortAlgorithm::Radix => code::radix_sort(data, sink),
        }
    }

    /// Sort `data` in place and return the Step Sequence, initial state first.
    pub fn record(self, data: &mut [Value]) -> Vec<Snapshot> {
        let mut recorder = SnapshotRecorder::starting_from(data);
        self.run(data, &mut recorder);
        recorder.into_snapshots()
    }

    /// Check the sorted-order postcondition on a batch of random inputs.
    pub fn verify(self) -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        // Include the edge cases of empty and single-element input
        for size in [0usize, 1, 2, 3, 17, 64] {
            let input: Vec<Value> = (0..size).map(|_| rng.random_range(-500..=500)).collect();
            let mut data = input.clone();
            let steps = self.record(&mut data);

            if steps.first() != Some(&input) {
                return Err(format!(
                    "'{}' does not start from the input for size {}",
                    self.name(),
                    size
                ));
            }

            let mut expected = input.clone();
            expected.sort_unstable();

            if steps.last() != Some(&expected) || data != expected {
                return Err(format!(
                    "'{}' failed verification for input {:?}. Expected {:?}, got {:?}",
                    self.name(),
                    input,
                    expected,
                    steps.last()
                ));
            }
        }

        Ok(())
    }
}
