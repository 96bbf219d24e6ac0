//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick Semantics
///
/// Every evaluation completes synchronously within a single tick. `Running`
/// does not suspend anything inside the tree: it reports that the node made
/// progress and expects to be ticked again, with the continuation carried by
/// the context (blackboard) rather than by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The goal was reached this tick.
    Success,

    /// The behavior made progress and should be evaluated again next tick.
    ///
    /// Conditions never return this.
    Running,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action is blocked (e.g., no path to the target).
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Upper-case label used by telemetry writers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Running => "RUNNING",
            Status::Failure => "FAILURE",
        }
    }
}

impl From<bool> for Status {
    /// Maps a predicate result onto `Success`/`Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
