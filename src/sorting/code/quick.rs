use crate::steps::{SnapshotSink, Value};

/// Quick sort with a Lomuto partition around the last element.
pub fn quick_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    if data.len() > 1 {
        let hi = data.len() - 1;
        sort_range(data, 0, hi, sink);
    }
}

/// Sort `data[lo..=hi]`.
fn sort_range(data: &mut [Value], lo: usize, hi: usize, sink: &mut dyn SnapshotSink) {
    if lo >= hi {
        return;
    }

    let p = partition(data, lo, hi, sink);
    if p > lo {
        sort_range(data, lo, p - 1, sink);
    }
    sort_range(data, p + 1, hi, sink);
}

/// Returns the final position of the pivot.
fn partition(data: &mut [Value], lo: usize, hi: usize, sink: &mut dyn SnapshotSink) -> usize {
    let pivot = data[hi];
    let mut store = lo;

    for j in lo..hi {
        if data[j] <= pivot {
            swap_and_capture(data, store, j, sink);
            store += 1;
        }
    }

    swap_and_capture(data, store, hi, sink);
    store
}

fn swap_and_capture(data: &mut [Value], a: usize, b: usize, sink: &mut dyn SnapshotSink) {
    if a != b {
        data.swap(a, b);
        sink.capture(data);
    }
}
