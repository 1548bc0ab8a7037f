use super::*;

#[test]
fn defaults_match_shipped_demo() {
    let c = DashboardConfig::default();
    assert!(!c.use_computed_aggregates);
    assert_eq!(c.upload_delay_ms, 2000);
    assert_eq!(c.export_delay_ms, 3000);
    assert_eq!(c.notice_capacity, 5);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let c = DashboardConfig::from_json(r#"{"use_computed_aggregates": true, "upload_delay_ms": 10}"#).unwrap();
    assert!(c.use_computed_aggregates);
    assert_eq!(c.upload_delay_ms, 10);
    assert_eq!(c.export_delay_ms, DEFAULT_EXPORT_DELAY_MS);
}

#[test]
fn malformed_override_is_an_error() {
    assert!(DashboardConfig::from_json(r#"{"upload_delay_ms": "fast"}"#).is_err());
}

#[test]
fn no_override_without_browser_storage() {
    assert_eq!(DashboardConfig::load_override(), None);
}

#[test]
fn notification_queue_uses_configured_capacity() {
    let c = DashboardConfig { notice_capacity: 2, ..DashboardConfig::default() };
    assert_eq!(c.notification_queue().capacity(), 2);
}
