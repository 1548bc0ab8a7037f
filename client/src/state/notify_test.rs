use super::*;

fn queue(capacity: usize) -> NotificationQueue {
    NotificationQueue::with_limits(capacity, 1000.0)
}

// =============================================================
// push / capacity
// =============================================================

#[test]
fn default_queue_uses_default_limits() {
    let q = NotificationQueue::default();
    assert!(q.is_empty());
    assert_eq!(q.capacity(), DEFAULT_NOTICE_CAPACITY);
}

#[test]
fn push_assigns_increasing_ids() {
    let mut q = queue(3);
    let a = q.push(Notice::info("a", ""), 0.0);
    let b = q.push(Notice::info("b", ""), 0.0);
    assert!(b > a);
    assert_eq!(q.len(), 2);
}

#[test]
fn push_evicts_oldest_when_full() {
    let mut q = queue(2);
    q.push(Notice::info("first", ""), 0.0);
    q.push(Notice::info("second", ""), 0.0);
    q.push(Notice::info("third", ""), 0.0);
    let titles: Vec<_> = q.iter().map(|n| n.notice.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "third"]);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut q = NotificationQueue::with_limits(0, 1000.0);
    q.push(Notice::info("a", ""), 0.0);
    q.push(Notice::info("b", ""), 0.0);
    assert_eq!(q.capacity(), 1);
    assert_eq!(q.len(), 1);
}

// =============================================================
// expire / dismiss
// =============================================================

#[test]
fn expire_removes_only_elapsed_entries() {
    let mut q = queue(5);
    q.push(Notice::info("old", ""), 0.0);
    q.push(Notice::info("new", ""), 800.0);
    assert_eq!(q.expire(1000.0), 1);
    assert_eq!(q.iter().next().map(|n| n.notice.title.as_str()), Some("new"));
    assert_eq!(q.expire(1799.0), 0);
    assert_eq!(q.expire(1800.0), 1);
    assert!(q.is_empty());
}

#[test]
fn early_sweep_reschedules_until_drained() {
    let mut q = NotificationQueue::with_limits(5, 4000.0);
    q.push(Notice::success("saved", ""), 1000.0);
    assert_eq!(q.expire(4999.0), 0);
    assert_eq!(q.next_sweep_delay_ms(4999.0), Some(1));
    assert_eq!(q.expire(5000.0), 1);
    assert_eq!(q.next_sweep_delay_ms(5000.0), None);
}

#[test]
fn sweep_delay_targets_earliest_deadline() {
    let mut q = queue(5);
    q.push(Notice::info("a", ""), 0.0);
    q.push(Notice::info("b", ""), 500.0);
    assert_eq!(q.next_sweep_delay_ms(250.0), Some(750));
    assert_eq!(q.next_sweep_delay_ms(2000.0), Some(1));
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut q = queue(5);
    let id = q.push(Notice::success("ok", ""), 0.0);
    assert!(!q.dismiss(id + 100));
    assert!(q.dismiss(id));
    assert!(q.is_empty());
}

#[test]
fn level_css_modifiers_are_distinct() {
    let levels = [NoticeLevel::Success, NoticeLevel::Info, NoticeLevel::Warning, NoticeLevel::Error];
    for (i, a) in levels.iter().enumerate() {
        for (j, b) in levels.iter().enumerate() {
            assert_eq!(i == j, a.css_modifier() == b.css_modifier());
        }
    }
}
