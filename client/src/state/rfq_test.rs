use super::*;
use crate::fixtures::dashboard;
use crate::state::notify::NoticeLevel;
use crate::state::test_helpers::RecordingSink;
use time::macros::date;

const TODAY: Date = date!(2024-02-20);

fn state() -> RfqState {
    RfqState::new(dashboard::rfq_projects())
}

// =============================================================
// create
// =============================================================

#[test]
fn blank_name_is_rejected_and_list_unchanged() {
    let mut s = state();
    let sink = RecordingSink::default();
    let err = s.create("   ", 4, TODAY, TODAY, &sink).unwrap_err();
    assert_eq!(err, RfqError::BlankName);
    assert_eq!(s.projects, dashboard::rfq_projects());
    assert_eq!(sink.levels(), vec![NoticeLevel::Warning]);
}

#[test]
fn create_inserts_draft_at_top_with_zero_counts() {
    let mut s = state();
    let sink = RecordingSink::default();
    let deadline = date!(2024-03-15);
    let id = s.create("Q2 Parts", 10, deadline, TODAY, &sink).unwrap();

    assert_eq!(id, 4);
    let p = &s.projects[0];
    assert_eq!(p.project_name, "Q2 Parts");
    assert_eq!(p.status, RfqStatus::Draft);
    assert_eq!(p.total_items, 10);
    assert_eq!(p.suppliers_contacted, 0);
    assert_eq!(p.quotes_received, 0);
    assert_eq!(p.estimated_savings, None);
    assert_eq!(p.deadline, deadline);
    assert_eq!(p.created_at, TODAY);
    assert_eq!(s.projects.len(), 4);
    assert_eq!(sink.last_level(), Some(NoticeLevel::Success));
    assert!(sink.notices.borrow()[0].description.contains("15.03.2024"));
}

#[test]
fn item_count_input_is_truncated_and_clamped() {
    assert_eq!(parse_item_count("12"), 12);
    assert_eq!(parse_item_count(" 7 "), 7);
    assert_eq!(parse_item_count("2.9"), 2);
    assert_eq!(parse_item_count("-4"), 0);
    assert_eq!(parse_item_count(""), 0);
    assert_eq!(parse_item_count("on iki"), 0);
    assert_eq!(parse_item_count("1e12"), u32::MAX);
}

#[test]
fn create_trims_surrounding_whitespace() {
    let mut s = RfqState::default();
    let sink = RecordingSink::default();
    s.create("  Döküm  ", 1, TODAY, TODAY, &sink).unwrap();
    assert_eq!(s.projects[0].project_name, "Döküm");
    assert_eq!(s.projects[0].id, 1);
}

// =============================================================
// transitions
// =============================================================

#[test]
fn transitions_move_forward_only() {
    assert_eq!(RfqStatus::Draft.next(RfqAction::Send), Some(RfqStatus::Active));
    assert_eq!(RfqStatus::Active.next(RfqAction::Complete), Some(RfqStatus::Completed));
    assert_eq!(RfqStatus::Draft.next(RfqAction::Complete), None);
    assert_eq!(RfqStatus::Active.next(RfqAction::Send), None);
    assert_eq!(RfqStatus::Completed.next(RfqAction::Send), None);
    assert_eq!(RfqStatus::Completed.next(RfqAction::Complete), None);
}

#[test]
fn send_then_complete_walks_the_lifecycle() {
    let mut s = state();
    let sink = RecordingSink::default();
    s.send(3, &sink).unwrap();
    assert_eq!(s.get(3).unwrap().status, RfqStatus::Active);
    s.complete(3, &sink).unwrap();
    assert_eq!(s.get(3).unwrap().status, RfqStatus::Completed);
    assert_eq!(sink.levels(), vec![NoticeLevel::Success, NoticeLevel::Success]);
}

#[test]
fn completed_project_cannot_move_back() {
    let mut s = state();
    let sink = RecordingSink::default();
    let err = s.send(2, &sink).unwrap_err();
    assert_eq!(err, RfqError::InvalidTransition { id: 2, from: RfqStatus::Completed, action: RfqAction::Send });
    assert_eq!(s.get(2).unwrap().status, RfqStatus::Completed);
    assert_eq!(sink.last_level(), Some(NoticeLevel::Warning));
}

#[test]
fn draft_cannot_be_completed_directly() {
    let mut s = state();
    let sink = RecordingSink::default();
    assert!(s.complete(3, &sink).is_err());
    assert_eq!(s.get(3).unwrap().status, RfqStatus::Draft);
}

#[test]
fn transition_on_unknown_id_reports_not_found() {
    let mut s = state();
    let sink = RecordingSink::default();
    assert_eq!(s.send(99, &sink), Err(RfqError::NotFound { id: 99 }));
    assert_eq!(sink.count(), 0);
}

#[test]
fn delete_works_from_any_status() {
    let mut s = state();
    assert!(s.delete(1));
    assert!(s.delete(2));
    assert!(s.delete(3));
    assert!(s.projects.is_empty());
    assert!(!s.delete(3));
}

// =============================================================
// derived values
// =============================================================

#[test]
fn overdue_only_for_active_past_deadline() {
    let projects = dashboard::rfq_projects();
    // Active, deadline 2024-02-15.
    assert!(projects[0].is_overdue(TODAY));
    assert!(!projects[0].is_overdue(date!(2024-02-15)));
    // Completed with a past deadline is never overdue.
    assert!(!projects[1].is_overdue(TODAY));
    // Draft.
    assert!(!projects[2].is_overdue(date!(2025-01-01)));
}

#[test]
fn average_savings_skips_missing_values() {
    assert!((average_savings(&dashboard::rfq_projects()) - 10.0).abs() < f64::EPSILON);
    assert!(average_savings(&[]).abs() < f64::EPSILON);
    let drafts: Vec<RfqProject> = dashboard::rfq_projects().into_iter().filter(|p| p.estimated_savings.is_none()).collect();
    assert!(average_savings(&drafts).abs() < f64::EPSILON);
}

#[test]
fn stats_count_statuses_and_pick_savings_source() {
    let s = state();
    let fixed = s.stats(false);
    assert_eq!((fixed.total, fixed.active, fixed.completed), (3, 1, 1));
    assert!((fixed.average_savings - FIXTURE_AVERAGE_SAVINGS).abs() < f64::EPSILON);
    let computed = s.stats(true);
    assert!((computed.average_savings - 10.0).abs() < f64::EPSILON);
}

#[test]
fn progress_is_share_of_contacted_suppliers_that_quoted() {
    let projects = dashboard::rfq_projects();
    assert_eq!(projects[0].progress_percent(), 75);
    assert_eq!(projects[1].progress_percent(), 100);
    assert_eq!(projects[2].progress_percent(), 0);
}

#[test]
fn default_deadline_is_thirty_days_out() {
    assert_eq!(default_deadline(date!(2024-01-15)), date!(2024-02-14));
}
