//! Correlation identifiers for review and recipe operations.
//!
//! Every caller request runs under one [`TraceId`], held in Tokio task-local
//! storage. [`crate::domain::Error`] values built inside the scope record it,
//! and [`TraceId::instrument`] attaches it to the log span of the operation.
//! Spawned tasks do not inherit the scope.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use tracing::{Instrument, Span, info_span};
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Identifier shared by every log line and error of one request.
///
/// # Examples
/// ```
/// use recipe_backend::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let trace_id = TraceId::generate();
/// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Random identifier for a new request.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request currently in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Log span for `operation`, tagged with this identifier.
    #[must_use]
    pub fn span(&self, operation: &'static str) -> Span {
        info_span!("review_request", trace_id = %self.0, operation)
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }

    /// Run `fut` under a fresh identifier inside the span for `operation`.
    pub async fn instrument<Fut>(operation: &'static str, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        let trace_id = Self::generate();
        let span = trace_id.span(operation);
        Self::scope(trace_id, fut.instrument(span)).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}
