use crate::steps::{SnapshotSink, Value};

/// Repeated adjacent compare-and-swap passes.
///
/// Stops early once a full pass performs no swap, otherwise after `n - 1` passes.
pub fn bubble_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    let n = data.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;

        // The last `pass` elements are already in their final place
        for j in 0..n - 1 - pass {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
                sink.capture(data);
            }
        }

        if !swapped {
            break;
        }
    }
}
