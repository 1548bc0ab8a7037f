//! Shared fixtures for state unit tests.

use std::cell::RefCell;

use super::notify::{Notice, NoticeLevel, NoticeSink};

/// Sink that records every published notice.
#[derive(Default)]
pub struct RecordingSink {
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingSink {
    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.borrow().iter().map(|n| n.level).collect()
    }

    pub fn last_level(&self) -> Option<NoticeLevel> {
        self.notices.borrow().last().map(|n| n.level)
    }

    pub fn count(&self) -> usize {
        self.notices.borrow().len()
    }
}

impl NoticeSink for RecordingSink {
    fn publish(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
