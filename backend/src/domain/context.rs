//! Per-call context handed to every service and storage operation.

use std::time::Instant;

use super::TraceId;

/// Ambient request metadata: the trace identifier and an optional deadline.
///
/// Operations accept the context so adapters can honour cancellation later;
/// none of the current implementations act on the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: Option<TraceId>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context for the enclosing request, picking up the scoped trace id.
    #[must_use]
    pub fn current() -> Self {
        Self {
            trace_id: TraceId::current(),
            deadline: None,
        }
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach a deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Trace identifier, when the call runs inside a traced request.
    #[must_use]
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Deadline, when one was supplied.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
