//! Step capture: the data produced by one instrumented algorithm run.
//!
//! Sorting algorithms report full-array [`Snapshot`]s through a
//! [`SnapshotSink`]; searches report one [`Probe`] per visited index through a
//! [`ProbeSink`]. The recorders collect them into a [`StepSequence`] which the
//! animation driver replays in order.

/// Numeric element type of every sequence the engine handles.
pub type Value = i64;

/// Full copy of the sequence at one instant of a sort.
pub type Snapshot = Vec<Value>;

/// One search step: which index was examined and whether it matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub index: usize,
    pub matched: bool,
}

impl Probe {
    pub fn new(index: usize, matched: bool) -> Self {
        Self { index, matched }
    }
}

/// Capability handed to sorting algorithms: "can append a Snapshot".
pub trait SnapshotSink {
    /// Called synchronously after every state-changing action.
    fn capture(&mut self, state: &[Value]);
}

/// Capability handed to search algorithms: "can append a Probe".
pub trait ProbeSink {
    fn probe(&mut self, probe: Probe);
}

/// Collects snapshots, always starting with the untouched input.
#[derive(Clone, Debug, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    /// Create a recorder whose first entry is `initial`.
    pub fn starting_from(initial: &[Value]) -> Self {
        Self {
            snapshots: vec![initial.to_vec()],
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl SnapshotSink for SnapshotRecorder {
    fn capture(&mut self, state: &[Value]) {
        self.snapshots.push(state.to_vec());
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProbeRecorder {
    probes: Vec<Probe>,
}

impl ProbeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_probes(self) -> Vec<Probe> {
        self.probes
    }
}

impl ProbeSink for ProbeRecorder {
    fn probe(&mut self, probe: Probe) {
        self.probes.push(probe);
    }
}

/// Ordered output of one algorithm run, consumed once by the animation driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepSequence {
    Sort(Vec<Snapshot>),
    Search {
        /// Bar heights shown for the whole replay.
        values: Vec<Value>,
        probes: Vec<Probe>,
    },
}

impl StepSequence {
    pub fn len(&self) -> usize {
        match self {
            StepSequence::Sort(snapshots) => snapshots.len(),
            StepSequence::Search { probes, .. } => probes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values the chart shows before the first frame is rendered.
    pub fn initial_values(&self) -> &[Value] {
        match self {
            StepSequence::Sort(snapshots) => snapshots.first().map(Vec::as_slice).unwrap_or(&[]),
            StepSequence::Search { values, .. } => values,
        }
    }
}
