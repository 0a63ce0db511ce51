use crate::steps::{SnapshotSink, Value};

/// Top-down merge sort.
///
/// Recursion works on index ranges of the full slice so the sink always
/// sees the whole array, not the half being merged.
pub fn merge_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    let len = data.len();
    sort_range(data, 0, len, sink);
}

/// Sort `data[lo..hi]`.
fn sort_range(data: &mut [Value], lo: usize, hi: usize, sink: &mut dyn SnapshotSink) {
    if hi - lo < 2 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(data, lo, mid, sink);
    sort_range(data, mid, hi, sink);
    merge(data, lo, mid, hi, sink);
}

fn merge(data: &mut [Value], lo: usize, mid: usize, hi: usize, sink: &mut dyn SnapshotSink) {
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements in their original order
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
        sink.capture(data);
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        data[k] = value;
        k += 1;
        sink.capture(data);
    }
}
