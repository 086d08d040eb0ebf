use csrimpact_bridge::notification::Notification;

/// Mirror of the backend-owned notification queue, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    pub notifications: Vec<Notification>,
}

impl NotificationsEntity {
    pub fn set(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
    }
}
