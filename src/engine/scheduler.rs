//! Frame coalescing: any number of scroll or resize events between two display frames produce
//! exactly one evaluation.

use crate::engine::host::{FrameToken, Host};

/// At most one outstanding frame request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    pending: Option<FrameToken>,
}

impl FrameScheduler {
    /// Idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the outstanding request, if any.
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Request a frame unless one is already outstanding. Returns `true` if a request was made.
    pub fn request<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(host.request_frame());
        true
    }

    /// Consume the outstanding request if `token` matches it.
    ///
    /// Stale or unknown tokens return `false` and leave the scheduler untouched.
    pub fn take(&mut self, token: FrameToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Cancel the outstanding request with the host.
    pub fn cancel<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scheduler.rs"]
mod tests;
