//! Transient notification queue shared by the landing page and dashboard views.
//!
//! DESIGN
//! ======
//! Views never reach for a global toaster. Each one receives a `NoticeSink`
//! and publishes into it; the queue behind the sink is bounded and every
//! entry carries its own expiry so the overlay drains without user action.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of notifications kept on screen at once.
pub const DEFAULT_NOTICE_CAPACITY: usize = 5;
/// Lifetime of a notification before it expires on its own.
pub const DEFAULT_NOTICE_TTL_MS: f64 = 4000.0;

/// Visual tone of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier used by the toast host.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message published by a view. Carries no timing information; the queue
/// stamps expiry on arrival.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { level, title: title.into(), description: description.into() }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, description)
    }
}

/// A queued notice with its identity and expiry deadline.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
    pub expires_at_ms: f64,
}

/// Bounded FIFO of live notifications.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
    ttl_ms: f64,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_limits(DEFAULT_NOTICE_CAPACITY, DEFAULT_NOTICE_TTL_MS)
    }
}

impl NotificationQueue {
    /// Build a queue holding at most `capacity` entries (minimum one), each
    /// living `ttl_ms` milliseconds.
    #[must_use]
    pub fn with_limits(capacity: usize, ttl_ms: f64) -> Self {
        let capacity = capacity.max(1);
        Self { items: VecDeque::with_capacity(capacity), capacity, ttl_ms: ttl_ms.max(0.0), next_id: 1 }
    }

    /// Enqueue a notice, evicting the oldest entry when full. Returns the id
    /// assigned to the new notification.
    pub fn push(&mut self, notice: Notice, now_ms: f64) -> u64 {
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification { id, notice, expires_at_ms: now_ms + self.ttl_ms });
        id
    }

    /// Remove one notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification whose deadline has passed. Returns how many
    /// were removed.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at_ms > now_ms);
        before - self.items.len()
    }

    /// Milliseconds until the earliest live entry expires, at least one.
    /// `None` once the queue is empty, which ends the sweep chain.
    #[must_use]
    pub fn next_sweep_delay_ms(&self, now_ms: f64) -> Option<u32> {
        let earliest = self.items.iter().map(|n| n.expires_at_ms).reduce(f64::min)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delay = (earliest - now_ms).ceil().clamp(1.0, f64::from(u32::MAX)) as u32;
        Some(delay)
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Publishing side of the notification channel.
///
/// Handed to each view explicitly; state operations publish through it when
/// an action succeeds or is rejected.
pub trait NoticeSink {
    fn publish(&self, notice: Notice);
}
