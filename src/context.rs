//! Request context
//!
//! Carries cancellation and an optional deadline through every page fetch of
//! a listing. A listing observes the context only while a request is in
//! flight: once the context is cancelled or its deadline passes, the current
//! fetch fails and the listing aborts.

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline for a listing operation
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// A context cancelled through the given token
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            deadline: None,
        }
    }

    /// Set an absolute deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline relative to now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The token that cancels this context
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fail if the context is already cancelled or past its deadline
    pub fn check(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drive `fut` to completion unless the context is cancelled or expires first
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            () = expired => Err(Error::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes() {
        let ctx = RequestContext::new();
        let value = ctx.run(async { Ok(42) }).await.unwrap();
        assert_eq!(value, 42);
        assert!(ctx.check().is_ok());
    }

    #[tokio::test]
    async fn test_run_cancelled() {
        let ctx = RequestContext::new();
        ctx.cancel();

        let result: Result<()> = ctx.run(std::future::pending()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(matches!(ctx.check(), Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_clone_shares_cancellation() {
        let token = CancellationToken::new();
        let ctx = RequestContext::with_cancellation(token.clone());
        let clone = ctx.clone();

        token.cancel();
        assert!(matches!(clone.check(), Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_deadline_exceeded() {
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(10));

        let result: Result<()> = ctx.run(std::future::pending()).await;
        assert!(matches!(result, Err(Error::DeadlineExceeded)));
        assert!(matches!(ctx.check(), Err(Error::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_deadline_in_future_does_not_fire() {
        let ctx = RequestContext::new().with_timeout(Duration::from_secs(60));
        assert!(ctx.deadline().is_some());

        let value = ctx.run(async { Ok("done") }).await.unwrap();
        assert_eq!(value, "done");
    }
}
