use leptos::prelude::*;

use super::*;
use crate::fixtures::dashboard;
use crate::state::config::DashboardConfig;

fn value_of(kpis: &[Kpi], kind: KpiKind) -> String {
    kpis.iter().find(|k| k.kind == kind).map(|k| k.value.clone()).unwrap_or_default()
}

#[test]
fn fixture_kpis_are_shown_by_default() {
    let kpis = overview_kpis(&dashboard::kpis(), &dashboard::rfq_projects(), false);
    assert_eq!(kpis, dashboard::kpis());
    assert_eq!(value_of(&kpis, KpiKind::TotalRfq), "47");
}

#[test]
fn computed_kpis_follow_the_rfq_list() {
    let kpis = overview_kpis(&dashboard::kpis(), &dashboard::rfq_projects(), true);
    assert_eq!(value_of(&kpis, KpiKind::TotalRfq), "3");
    assert_eq!(value_of(&kpis, KpiKind::ActiveProjects), "1");
    assert_eq!(value_of(&kpis, KpiKind::AverageSavings), "%10.0");
    assert_eq!(value_of(&kpis, KpiKind::QuoteTurnaround), "36 Saat");
}

#[test]
fn computed_kpis_over_empty_list_are_zero() {
    let kpis = overview_kpis(&dashboard::kpis(), &[], true);
    assert_eq!(value_of(&kpis, KpiKind::TotalRfq), "0");
    assert_eq!(value_of(&kpis, KpiKind::AverageSavings), "%0.0");
}

#[test]
fn kpis_follow_a_config_override_applied_after_mount() {
    let config = RwSignal::new(DashboardConfig::default());
    let kpis = Memo::new(move |_| {
        config.with(|c| overview_kpis(&dashboard::kpis(), &dashboard::rfq_projects(), c.use_computed_aggregates))
    });
    assert_eq!(value_of(&kpis.get_untracked(), KpiKind::TotalRfq), "47");

    let loaded = DashboardConfig::from_json(r#"{"use_computed_aggregates": true}"#).unwrap();
    config.set(loaded);
    assert_eq!(value_of(&kpis.get_untracked(), KpiKind::TotalRfq), "3");
}
