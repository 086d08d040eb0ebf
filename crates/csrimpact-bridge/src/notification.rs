use serde::{Deserialize, Serialize};

/// Severity or category for user-visible notifications.
///
/// This enum classifies notifications by their intent and visual styling,
/// allowing the UI to display them appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates an error or failure that may affect functionality.
    Error,
    /// Neutral informational message that does not indicate success or failure.
    Info,
}

/// A transient notification queued for display in the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier unique within the owning queue's lifetime.
    pub id: u64,
    /// The kind of the notification, determining its visual style.
    pub kind: NotificationKind,
    /// The text content to display to the user.
    pub text: String,
}

/// An insertion-ordered queue of transient notifications.
///
/// The queue itself holds no timers: expiry scheduling belongs to whoever
/// owns the queue. Identifiers are monotonically increasing, so no two
/// notifications ever share one, and removal by a stale id is a no-op.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the end of the queue and returns its
    /// freshly assigned identifier. Cannot fail.
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Removes the notification with the given id, preserving the order of
    /// the remaining entries. Returns whether an entry was actually removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// The queued notifications, oldest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// A copy of the queue suitable for sending across the bridge.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_one_entry_per_kind() {
        let mut queue = NotificationQueue::new();
        for (i, kind) in [
            NotificationKind::Success,
            NotificationKind::Error,
            NotificationKind::Info,
        ]
        .into_iter()
        .enumerate()
        {
            queue.push(kind, "message");
            assert_eq!(queue.len(), i + 1);
        }
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(NotificationKind::Info, "a");
        let b = queue.push(NotificationKind::Info, "b");
        let c = queue.push(NotificationKind::Info, "c");
        assert!(a < b && b < c);
    }

    #[test]
    fn remove_targets_only_the_given_id_and_keeps_order() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(NotificationKind::Success, "a");
        let b = queue.push(NotificationKind::Error, "b");
        let c = queue.push(NotificationKind::Info, "c");

        assert!(queue.remove(b));
        let remaining: Vec<u64> = queue.entries().iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationKind::Info, "only");
        assert!(!queue.remove(999));
        assert_eq!(queue.len(), 1);
    }
}
