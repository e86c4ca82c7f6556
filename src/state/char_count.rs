//! Character counter for limited text areas.
//!
//! The count tracks the most recent value reported by the control, seeded
//! from the initial value at mount. Characters are Unicode scalar values, so
//! "héllo" is 5 and an emoji is 1.

use spark_signals::{Signal, signal};

/// Count the characters of `text` the way the counter does.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Per-instance character counter.
#[derive(Clone)]
pub struct CharCounter {
    limit: Option<usize>,
    count: Signal<usize>,
}

impl CharCounter {
    pub fn new(limit: Option<usize>, initial: &str) -> Self {
        Self {
            limit,
            count: signal(char_count(initial)),
        }
    }

    /// Record the control's latest text. Returns the new count.
    pub fn record(&self, text: &str) -> usize {
        let count = char_count(text);
        self.count.set(count);
        count
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Characters left before the limit. Zero once the limit is reached.
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.count()))
    }

    /// Counter text, `"{count}/{limit}"`. None when there is no limit.
    pub fn label(&self) -> Option<String> {
        self.limit.map(|limit| format!("{}/{}", self.count(), limit))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_initial_value() {
        let counter = CharCounter::new(Some(200), "hello");
        assert_eq!(counter.count(), 5);
        assert_eq!(counter.label(), Some("5/200".to_string()));
    }

    #[test]
    fn test_counts_scalar_values() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(char_count("🚀"), 1);
        assert_eq!(char_count("a\nb"), 3);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn test_record_replaces_count() {
        let counter = CharCounter::new(Some(10), "");
        assert_eq!(counter.label(), Some("0/10".to_string()));

        assert_eq!(counter.record("abc"), 3);
        assert_eq!(counter.remaining(), Some(7));

        assert_eq!(counter.record("a"), 1);
        assert_eq!(counter.label(), Some("1/10".to_string()));
    }

    #[test]
    fn test_no_limit_no_label() {
        let counter = CharCounter::new(None, "text");
        assert_eq!(counter.count(), 4);
        assert_eq!(counter.label(), None);
        assert_eq!(counter.remaining(), None);
    }

    #[test]
    fn test_over_limit_reports_zero_remaining() {
        let counter = CharCounter::new(Some(3), "abcdef");
        assert_eq!(counter.label(), Some("6/3".to_string()));
        assert_eq!(counter.remaining(), Some(0));
    }
}
