use super::*;
use crate::fixtures::dashboard;
use crate::state::notify::NoticeLevel;
use crate::state::test_helpers::RecordingSink;

fn state() -> DiscoveryState {
    DiscoveryState::new(dashboard::suppliers())
}

fn supplier(id: u32, name: &str, score: u8) -> Supplier {
    Supplier {
        id,
        name: name.to_owned(),
        location: "Bursa".to_owned(),
        rating: 4.0,
        specialties: vec!["Döküm".to_owned()],
        response_time_hours: 3,
        certifications: Vec::new(),
        match_score: score,
        contact_person: "Kişi".to_owned(),
    }
}

fn visible_ids(s: &DiscoveryState) -> Vec<u32> {
    s.visible().iter().map(|x| x.id).collect()
}

// =============================================================
// search / category
// =============================================================

#[test]
fn search_matches_name_location_or_specialty() {
    let mut s = state();
    s.search("konya");
    assert_eq!(visible_ids(&s), vec![1]);
    s.search("SITELER");
    assert_eq!(visible_ids(&s), vec![2]);
    s.search("pcb");
    assert_eq!(visible_ids(&s), vec![3]);
    s.search("osb");
    assert_eq!(visible_ids(&s), vec![1, 3]);
}

#[test]
fn search_without_hits_is_empty() {
    let mut s = state();
    s.search("tekstil");
    assert!(s.visible().is_empty());
}

#[test]
fn category_filter_requires_exact_specialty() {
    let mut s = state();
    s.filter_by_category("Döküm");
    assert_eq!(visible_ids(&s), vec![1]);
    s.filter_by_category("CNC");
    assert!(s.visible().is_empty());
    s.filter_by_category(ALL_CATEGORIES);
    assert_eq!(s.visible().len(), 3);
}

// =============================================================
// sorting
// =============================================================

#[test]
fn default_sort_is_match_score_descending() {
    assert_eq!(visible_ids(&state()), vec![1, 3, 2]);
}

#[test]
fn rating_sorts_descending_and_response_time_ascending() {
    let mut s = state();
    s.sort_by(SupplierSort::Rating);
    assert_eq!(visible_ids(&s), vec![3, 1, 2]);
    s.sort_by(SupplierSort::ResponseTime);
    assert_eq!(visible_ids(&s), vec![3, 1, 2]);
}

#[test]
fn name_sort_is_non_decreasing() {
    let mut s = state();
    s.sort_by(SupplierSort::Name);
    let rows = s.visible();
    assert!(rows.windows(2).all(|w| w[0].name <= w[1].name));
}

#[test]
fn sort_is_stable_for_ties() {
    let suppliers = [supplier(1, "B", 80), supplier(2, "A", 80), supplier(3, "C", 80)];
    let mut rows: Vec<&Supplier> = suppliers.iter().collect();
    sort_suppliers(&mut rows, SupplierSort::MatchScore);
    let ids: Vec<u32> = rows.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// =============================================================
// marks
// =============================================================

#[test]
fn toggle_favorite_flips() {
    let mut s = state();
    assert!(s.toggle_favorite(2));
    assert!(s.is_favorite(2));
    assert!(!s.toggle_favorite(2));
    assert!(!s.is_favorite(2));
}

#[test]
fn mark_contacted_records_and_confirms() {
    let mut s = state();
    let sink = RecordingSink::default();
    s.mark_contacted(1, &sink);
    assert!(s.is_contacted(1));
    assert_eq!(sink.last_level(), Some(NoticeLevel::Success));
}

#[test]
fn mark_contacted_unknown_supplier_is_ignored() {
    let mut s = state();
    let sink = RecordingSink::default();
    s.mark_contacted(50, &sink);
    assert!(s.contacted.is_empty());
    assert_eq!(sink.count(), 0);
}

#[test]
fn bulk_send_with_empty_selection_warns_and_changes_nothing() {
    let mut s = state();
    let sink = RecordingSink::default();
    assert_eq!(s.bulk_send_rfq(&sink), Err(DiscoveryError::EmptySelection));
    assert!(s.contacted.is_empty());
    assert_eq!(sink.levels(), vec![NoticeLevel::Warning]);
}

#[test]
fn bulk_send_contacts_selection_and_clears_it() {
    let mut s = state();
    let sink = RecordingSink::default();
    s.toggle_selected(1);
    s.toggle_selected(3);
    assert_eq!(s.bulk_send_rfq(&sink), Ok(2));
    assert!(s.is_contacted(1) && s.is_contacted(3));
    assert!(!s.is_contacted(2));
    assert!(s.selected.is_empty());
    assert_eq!(sink.last_level(), Some(NoticeLevel::Success));
}

// =============================================================
// presentation helpers
// =============================================================

#[test]
fn score_bands_follow_thresholds() {
    assert_eq!(ScoreBand::of(95), ScoreBand::High);
    assert_eq!(ScoreBand::of(90), ScoreBand::High);
    assert_eq!(ScoreBand::of(89), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(80), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(79), ScoreBand::Low);
}

#[test]
fn full_stars_floor_the_rating() {
    let mut s = supplier(1, "X", 1);
    s.rating = 4.8;
    assert_eq!(s.full_stars(), 4);
    s.rating = 7.0;
    assert_eq!(s.full_stars(), 5);
}
