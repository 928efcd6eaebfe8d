//! Progress and error reporting hooks for offer reads.
//!
//! A host UI usually shows a "working" message while a read is in flight and
//! surfaces failures in a console. [`ProgressNotifier`] and [`ErrorReporter`]
//! are the two seams for that; [`TracingNotifier`] implements both by
//! emitting `tracing` events.

use std::fmt;

use crate::offer::errors::OfferError;

/// Clears a progress message when dropped.
///
/// The release callback runs exactly once: on drop, or earlier through
/// [`ProgressGuard::release`].
#[must_use = "dropping the guard clears the progress message immediately"]
pub struct ProgressGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ProgressGuard {
    /// Creates a guard that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to clear.
    pub const fn noop() -> Self {
        Self { release: None }
    }

    /// Clears the progress message now.
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for ProgressGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressGuard")
            .field("pending", &self.release.is_some())
            .finish()
    }
}

/// Shows a progress message for the lifetime of the returned guard.
pub trait ProgressNotifier {
    /// Starts showing `message`.
    fn begin_progress(&self, message: &str) -> ProgressGuard;
}

/// Receives failures before they are returned to the caller.
pub trait ErrorReporter {
    /// Reports one failure of `operation`.
    fn report_error(&self, error: &OfferError, operation: &str, message: &str);
}

/// Logs progress and errors through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl ProgressNotifier for TracingNotifier {
    fn begin_progress(&self, message: &str) -> ProgressGuard {
        tracing::info!(progress = %message, "Progress started");
        let message = message.to_string();
        ProgressGuard::new(move || {
            tracing::debug!(progress = %message, "Progress cleared");
        })
    }
}

impl ErrorReporter for TracingNotifier {
    fn report_error(&self, error: &OfferError, operation: &str, message: &str) {
        tracing::error!(operation, error = %error, "{message}");
    }
}
