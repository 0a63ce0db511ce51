use crate::steps::{Probe, ProbeSink, Value};

/// Scan from index 0, reporting a probe for every visited index.
///
/// Returns the first matching index, or `None` once the sequence is exhausted.
pub fn linear_search(data: &[Value], target: Value, sink: &mut dyn ProbeSink) -> Option<usize> {
    for (index, &value) in data.iter().enumerate() {
        let matched = value == target;
        sink.probe(Probe::new(index, matched));

        if matched {
            return Some(index);
        }
    }

    None
}
