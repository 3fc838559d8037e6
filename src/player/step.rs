//! Step data type

/// One observable moment of an algorithm's execution.
///
/// The snapshot is a deep, point-in-time copy of everything needed to
/// render the visualization at this instant; generators must never store
/// live references to their working state here. Algorithm-specific
/// metadata (pointer indices, highlight flags, the midpoint) lives inside
/// the snapshot type of each generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    /// Full render state at this instant
    pub snapshot: S,
    /// Human-readable description of what happened
    pub narration: String,
}

impl<S> Step<S> {
    /// Create a new step
    pub fn new(snapshot: S, narration: impl Into<String>) -> Self {
        Self {
            snapshot,
            narration: narration.into(),
        }
    }
}
