use crate::steps::{SnapshotSink, Value};

const RADIX: u64 = 10;

/// LSD radix sort, base 10, one counting-sort pass per digit.
///
/// Keys are offset by the minimum so negative values sort correctly. The sink
/// sees the array once after each digit pass.
pub fn radix_sort(data: &mut [Value], sink: &mut dyn SnapshotSink) {
    let Some(&min) = data.iter().min() else {
        return;
    };

    let key = |value: Value| value.abs_diff(min);
    let max_key = data.iter().map(|&v| key(v)).max().unwrap_or(0);

    let mut output = vec![0; data.len()];
    let mut exp: u64 = 1;

    while max_key / exp > 0 {
        let digit = |value: Value| ((key(value) / exp) % RADIX) as usize;

        let mut counts = [0usize; RADIX as usize];
        for &value in data.iter() {
            counts[digit(value)] += 1;
        }
        for d in 1..counts.len() {
            counts[d] += counts[d - 1];
        }

        // Walk backwards so each pass is stable
        for &value in data.iter().rev() {
            let d = digit(value);
            counts[d] -= 1;
            output[counts[d]] = value;
        }

        data.copy_from_slice(&output);
        sink.capture(data);

        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }
}
