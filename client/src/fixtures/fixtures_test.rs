use super::*;
use crate::state::nav::NavKey;
use std::collections::BTreeSet;

fn unique<T: Ord>(ids: impl IntoIterator<Item = T>) -> bool {
    let mut seen = BTreeSet::new();
    ids.into_iter().all(|id| seen.insert(id))
}

#[test]
fn fixture_ids_are_unique_per_entity() {
    assert!(unique(dashboard::bom_items().iter().map(|i| i.id)));
    assert!(unique(dashboard::suppliers().iter().map(|s| s.id)));
    assert!(unique(dashboard::rfq_projects().iter().map(|p| p.id)));
    assert!(unique(dashboard::quotes().iter().map(|q| q.id)));
    assert!(unique(dashboard::erp_exports().iter().map(|e| e.id)));
    assert!(unique(dashboard::kpis().iter().map(|k| k.id)));
}

#[test]
fn navigation_lists_every_view_once_in_menu_order() {
    let keys: Vec<NavKey> = dashboard::navigation().iter().map(|n| n.key).collect();
    assert_eq!(keys, NavKey::ALL.to_vec());
    let first = &dashboard::navigation()[1];
    assert_eq!(first.href, "/bom-upload");
}

#[test]
fn quick_actions_never_target_the_overview() {
    assert!(dashboard::quick_actions().iter().all(|a| a.target != NavKey::Dashboard));
}

#[test]
fn demo_text_fields_have_distinct_ids() {
    assert!(unique(landing::DEMO_TEXT_FIELDS.iter().map(|f| f.id)));
}

#[test]
fn header_links_point_at_page_anchors() {
    assert!(landing::HEADER_LINKS.iter().all(|l| l.href.starts_with('#')));
}
