/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All refinement stages ran to completion.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a funnel search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// The estimated optimal starting position.
    pub position: f64,

    /// The mean traversal cost observed at the reported position.
    pub cost: f64,

    /// Number of refinement stages fully completed.
    pub stages: usize,
}
