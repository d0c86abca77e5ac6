//! Side effects on the hosting shell.
//!
//! The core never touches the viewport or the system browser directly;
//! it goes through this seam so the CLI shell (and tests) can supply their
//! own implementation.

/// Effects the orchestration layer requests from its host.
pub trait ShellEffects: Send + Sync {
    /// Resets the viewport scroll position. Called once per committed
    /// navigation.
    fn reset_scroll(&self);

    /// Opens an external URL in a sandboxed browsing context (no opener
    /// access back into the application).
    fn open_url(&self, url: &str);
}

/// A shell that performs no effects. Useful as a default and in tests.
#[derive(Debug, Default)]
pub struct NullShell;

impl ShellEffects for NullShell {
    fn reset_scroll(&self) {}

    fn open_url(&self, url: &str) {
        tracing::debug!(url, "open_url requested on a shell without a browser");
    }
}
