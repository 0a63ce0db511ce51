//! # Search Algorithms
//!
//! Searches report one [`Probe`] per examined index. They never mutate the
//! sequence and are kept apart from the sorting path.

pub mod code;
#[cfg(test)]
pub mod test;

use crate::steps::{Probe, ProbeRecorder, ProbeSink, Value};

/// Index printed in place of a position when the target is absent.
pub const NOT_FOUND: isize = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 1] = [SearchAlgorithm::Linear];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Sequential scan from the first element",
        }
    }

    pub fn run(self, data: &[Value], target: Value, sink: &mut dyn ProbeSink) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => code::linear_search(data, target, sink),
        }
    }

    /// Search `data` and return the found index together with the probes.
    pub fn record(self, data: &[Value], target: Value) -> (Option<usize>, Vec<Probe>) {
        let mut recorder = ProbeRecorder::new();
        let found = self.run(data, target, &mut recorder);
        (found, recorder.into_probes())
    }

    /// Check that the returned index agrees with the probe trail.
    pub fn verify(self) -> Result<(), String> {
        let data: Vec<Value> = (0..32).map(|i| i * 3 - 20).collect();

        for (expected, &target) in data.iter().enumerate() {
            let (found, probes) = self.record(&data, target);
            if found != Some(expected) || probes.last() != Some(&Probe::new(expected, true)) {
                return Err(format!(
                    "'{}' failed verification for target {}. Expected index {}, got {:?}",
                    self.name(),
                    target,
                    expected,
                    found
                ));
            }
        }

        let (found, probes) = self.record(&data, 2);
        if found.is_some() || probes.iter().any(|p| p.matched) {
            return Err(format!("'{}' reported a match for an absent target", self.name()));
        }

        Ok(())
    }
}

/// Found index as shown to the user, with [`NOT_FOUND`] for absent targets.
pub fn display_index(found: Option<usize>) -> isize {
    found.map_or(NOT_FOUND, |index| index as isize)
}
