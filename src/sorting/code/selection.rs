use crate::steps::{SnapshotSink, Value};

pub fn selection_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    let n = data.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            data.swap(i, min_idx);
            sink.capture(data);
        }
    }
}
