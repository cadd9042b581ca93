//! Navbar notification tray.
//!
//! The backend has no notification feed; the tray starts from a fixed set of
//! entries and all changes stay local to the session.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Messages longer than this are collapsed until expanded.
pub const TRUNCATE_AT: usize = 80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Relative time label (`2 min ago`).
    pub time: String,
    pub read: bool,
    pub expanded: bool,
}

impl Notification {
    fn new(id: u32, title: &str, message: &str, time: &str, read: bool) -> Self {
        Self {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            time: time.to_owned(),
            read,
            expanded: false,
        }
    }

    /// Whether the message needs a show-more toggle.
    #[must_use]
    pub fn should_truncate(&self) -> bool {
        self.message.chars().count() > TRUNCATE_AT
    }

    /// Message as rendered: shortened with an ellipsis while collapsed.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.expanded || !self.should_truncate() {
            return self.message.clone();
        }
        let head: String = self.message.chars().take(TRUNCATE_AT).collect();
        format!("{}...", head.trim_end())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Tray contents shown on first load.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Notification::new(
                    1,
                    "New Message",
                    "You have received a new message from John Doe regarding the project deadline extension. The client has agreed to extend the deadline by two weeks, but they need the initial mockups by tomorrow evening.",
                    "2 min ago",
                    false,
                ),
                Notification::new(
                    2,
                    "System Update",
                    "Your system has been updated to version 2.0. This includes several new features and security patches. Please review the changelog for complete details.",
                    "1 hour ago",
                    false,
                ),
                Notification::new(
                    3,
                    "Payment Received",
                    "Your payment of $100 has been received successfully. The transaction ID is TXN-456789. Thank you for your business!",
                    "3 hours ago",
                    true,
                ),
                Notification::new(
                    4,
                    "Meeting Reminder",
                    "You have a meeting at 2:00 PM today with the marketing team to discuss the Q3 campaign strategy. Please bring your presentation materials.",
                    "Yesterday",
                    true,
                ),
            ],
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn delete(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn toggle_expand(&mut self, id: u32) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.expanded = !n.expanded;
        }
    }
}
