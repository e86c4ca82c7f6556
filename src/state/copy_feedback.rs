//! Copy-feedback state for the copy action of an input.
//!
//! ```text
//! Idle ──copy ok──▶ Succeeded ──3s──▶ Idle
//!   │                   │
//!   └──copy failed──▶ Failed (sticky until the next copy)
//! ```
//!
//! Every copy invocation takes a fresh token and cancels the revert timer of
//! the previous one. Clipboard completions and revert timers carry their
//! token and do nothing once a newer invocation exists.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, signal};

use crate::error::ClipboardError;
use super::clipboard::Clipboard;
use super::timers::{self, TimerHandle};

/// How long "Copied" stays up before the label returns to "Copy".
pub const COPY_REVERT_DELAY: Duration = Duration::from_secs(3);

/// Feedback shown on the copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Succeeded,
    Failed,
}

impl CopyFeedback {
    /// Button label for this state.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Succeeded => "Copied",
            Self::Failed => "Failed to copy",
        }
    }
}

/// Identifies one copy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyToken(u64);

/// Per-instance copy-feedback machine.
///
/// Clones share state, so completion callbacks and timers can hold one.
#[derive(Clone)]
pub struct CopyFeedbackState {
    state: Signal<CopyFeedback>,
    latest: Rc<Cell<u64>>,
    revert: Rc<Cell<Option<TimerHandle>>>,
    revert_delay: Duration,
}

impl CopyFeedbackState {
    pub fn new() -> Self {
        Self::with_revert_delay(COPY_REVERT_DELAY)
    }

    pub fn with_revert_delay(revert_delay: Duration) -> Self {
        Self {
            state: signal(CopyFeedback::Idle),
            latest: Rc::new(Cell::new(0)),
            revert: Rc::new(Cell::new(None)),
            revert_delay,
        }
    }

    pub fn state(&self) -> CopyFeedback {
        self.state.get()
    }

    pub fn label(&self) -> &'static str {
        self.state().label()
    }

    /// Check if `token` belongs to the most recent invocation.
    pub fn is_current(&self, token: CopyToken) -> bool {
        self.latest.get() == token.0
    }

    /// Check if a revert to Idle is scheduled.
    pub fn has_pending_revert(&self) -> bool {
        match self.revert.get() {
            Some(handle) => handle.is_pending(),
            None => false,
        }
    }

    /// Copy `text` and update the feedback once the clipboard answers.
    pub fn copy(&self, clipboard: &dyn Clipboard, text: &str) -> CopyToken {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        self.cancel_revert();
        tracing::debug!(token, chars = text.chars().count(), "copy requested");

        let this = self.clone();
        clipboard.write_text(
            text,
            Box::new(move |result| this.resolve(token, result)),
        );

        CopyToken(token)
    }

    /// Drop any pending revert and ignore completions still in flight.
    ///
    /// Called when the owning input unmounts.
    pub fn cancel(&self) {
        self.latest.set(self.latest.get() + 1);
        self.cancel_revert();
    }

    fn cancel_revert(&self) {
        if let Some(handle) = self.revert.take() {
            handle.cancel();
        }
    }

    fn resolve(&self, token: u64, result: Result<(), ClipboardError>) {
        if self.latest.get() != token {
            tracing::trace!(token, "stale copy completion ignored");
            return;
        }

        match result {
            Ok(()) => {
                self.state.set(CopyFeedback::Succeeded);

                let state = self.state.clone();
                let latest = self.latest.clone();
                let revert = self.revert.clone();
                let handle = timers::schedule(self.revert_delay, move || {
                    if latest.get() != token {
                        return;
                    }
                    revert.set(None);
                    state.set(CopyFeedback::Idle);
                    tracing::trace!(token, "copy feedback reverted");
                });
                self.revert.set(Some(handle));
            }
            Err(err) => {
                tracing::warn!(token, error = %err, "copy to clipboard failed");
                self.state.set(CopyFeedback::Failed);
            }
        }
    }
}

impl Default for CopyFeedbackState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clipboard::{BufferClipboard, ClipboardCallback, UnavailableClipboard};
    use std::cell::RefCell;

    fn setup() {
        timers::reset_timers();
    }

    /// Clipboard whose writes complete only when the test says so.
    #[derive(Default)]
    struct DeferredClipboard {
        pending: RefCell<Vec<ClipboardCallback>>,
    }

    impl DeferredClipboard {
        fn complete(&self, index: usize, result: Result<(), ClipboardError>) {
            let done = self.pending.borrow_mut().remove(index);
            done(result);
        }
    }

    impl Clipboard for DeferredClipboard {
        fn write_text(&self, _text: &str, done: ClipboardCallback) {
            self.pending.borrow_mut().push(done);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CopyFeedback::Idle.label(), "Copy");
        assert_eq!(CopyFeedback::Succeeded.label(), "Copied");
        assert_eq!(CopyFeedback::Failed.label(), "Failed to copy");
    }

    #[test]
    fn test_success_reverts_after_delay() {
        setup();
        let feedback = CopyFeedbackState::new();

        feedback.copy(&BufferClipboard, "value");
        assert_eq!(feedback.label(), "Copied");
        assert!(feedback.has_pending_revert());

        timers::advance(Duration::from_millis(2999));
        assert_eq!(feedback.label(), "Copied");

        timers::advance(Duration::from_millis(1));
        assert_eq!(feedback.label(), "Copy");
        assert!(!feedback.has_pending_revert());
    }

    #[test]
    fn test_failure_is_sticky() {
        setup();
        let feedback = CopyFeedbackState::new();

        feedback.copy(&UnavailableClipboard::default(), "value");
        assert_eq!(feedback.state(), CopyFeedback::Failed);

        timers::advance(Duration::from_secs(60));
        assert_eq!(feedback.label(), "Failed to copy");

        // Next invocation can succeed
        feedback.copy(&BufferClipboard, "value");
        assert_eq!(feedback.label(), "Copied");
    }

    #[test]
    fn test_second_copy_restarts_timer() {
        setup();
        let feedback = CopyFeedbackState::new();

        feedback.copy(&BufferClipboard, "one");
        timers::advance(Duration::from_secs(2));
        feedback.copy(&BufferClipboard, "two");

        // First timer would have fired here
        timers::advance(Duration::from_millis(1500));
        assert_eq!(feedback.label(), "Copied");
        assert_eq!(timers::pending_count(), 1);

        timers::advance(Duration::from_millis(1500));
        assert_eq!(feedback.label(), "Copy");
    }

    #[test]
    fn test_failure_after_success_cancels_revert() {
        setup();
        let feedback = CopyFeedbackState::new();

        feedback.copy(&BufferClipboard, "one");
        feedback.copy(&UnavailableClipboard::default(), "two");
        assert_eq!(feedback.label(), "Failed to copy");

        timers::advance(Duration::from_secs(5));
        assert_eq!(feedback.label(), "Failed to copy");
    }

    #[test]
    fn test_stale_completion_ignored() {
        setup();
        let feedback = CopyFeedbackState::new();
        let clipboard = DeferredClipboard::default();

        let first = feedback.copy(&clipboard, "one");
        let second = feedback.copy(&clipboard, "two");
        assert!(!feedback.is_current(first));
        assert!(feedback.is_current(second));

        // Label unchanged while writes are pending
        assert_eq!(feedback.label(), "Copy");

        // Second resolves first, then the stale one fails late
        clipboard.complete(1, Ok(()));
        clipboard.complete(0, Err(ClipboardError::Write("busy".to_string())));
        assert_eq!(feedback.label(), "Copied");
    }

    #[test]
    fn test_cancel_on_unmount() {
        setup();
        let feedback = CopyFeedbackState::new();
        let clipboard = DeferredClipboard::default();

        feedback.copy(&BufferClipboard, "one");
        assert_eq!(timers::pending_count(), 1);

        feedback.copy(&clipboard, "two");
        feedback.cancel();
        assert_eq!(timers::pending_count(), 0);

        clipboard.complete(0, Ok(()));
        assert_eq!(feedback.label(), "Copied");
        assert_eq!(timers::pending_count(), 0);
    }
}
