use crate::steps::{SnapshotSink, Value};

pub fn insertion_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        // Shift larger elements one slot to the right
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
            sink.capture(data);
        }

        if j != i {
            data[j] = key;
            sink.capture(data);
        }
    }
}
