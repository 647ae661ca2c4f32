use crate::player::Notification;
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);
const MAX_VISIBLE: usize = 4;

/// Transient messages, newest last. Each one expires on its own.
#[derive(Default)]
pub struct NotificationStack {
    entries: VecDeque<(Notification, Instant)>,
}

impl NotificationStack {
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.entries.push_back((notification, now));
        if self.entries.len() > MAX_VISIBLE {
            self.entries.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|(_, shown)| now.saturating_duration_since(*shown) < NOTIFICATION_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
