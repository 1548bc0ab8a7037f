use super::*;
use crate::state::notify::NoticeLevel;
use crate::state::test_helpers::RecordingSink;

fn filled() -> DemoRequestState {
    let mut s = DemoRequestState::default();
    s.request_demo();
    s.set_field(DemoField::CompanyName, "Örnek Döküm A.Ş.");
    s.set_field(DemoField::ContactName, "Elif Şahin");
    s.set_field(DemoField::Email, "elif@example.com");
    s.set_field(DemoField::Phone, "0212 000 00 00");
    s.set_field(DemoField::EmployeeCount, "250-500");
    s
}

#[test]
fn starts_hidden_without_thank_you() {
    let s = DemoRequestState::default();
    assert_eq!(s.flow, DemoFlow::Hidden);
    assert!(!s.show_thank_you());
}

#[test]
fn request_demo_shows_form() {
    let mut s = DemoRequestState::default();
    s.request_demo();
    assert!(s.is_form_shown());
    assert!(!s.show_thank_you());
}

#[test]
fn submit_hides_form_clears_values_and_confirms() {
    let mut s = filled();
    let sink = RecordingSink::default();
    let sent = s.submit(&sink).unwrap();

    assert_eq!(sent.company_name, "Örnek Döküm A.Ş.");
    assert_eq!(sent.employee_count, Some(EmployeeRange::From250To500));
    assert_eq!(s.form, DemoForm::default());
    assert_eq!(s.flow, DemoFlow::Hidden);
    assert!(s.show_thank_you());
    assert_eq!(sink.levels(), vec![NoticeLevel::Success]);
}

#[test]
fn submit_while_hidden_does_nothing() {
    let mut s = DemoRequestState::default();
    let sink = RecordingSink::default();
    assert!(s.submit(&sink).is_none());
    assert_eq!(sink.count(), 0);
}

#[test]
fn unknown_employee_range_clears_selection() {
    let mut s = filled();
    s.set_field(DemoField::EmployeeCount, "10-20");
    assert_eq!(s.form.employee_count, None);
    assert_eq!(s.form.value(DemoField::EmployeeCount), "");
}

#[test]
fn form_serializes_with_camel_case_keys_and_range_values() {
    let json = serde_json::to_value(&filled().form).unwrap();
    assert_eq!(json["companyName"], "Örnek Döküm A.Ş.");
    assert_eq!(json["employeeCount"], "250-500");
}

// =============================================================
// header
// =============================================================

#[test]
fn header_condenses_only_past_threshold() {
    let mut h = HeaderState::default();
    assert!(!h.on_scroll(HEADER_SCROLL_THRESHOLD_PX));
    assert!(!h.scrolled);
    assert!(h.on_scroll(HEADER_SCROLL_THRESHOLD_PX + 1.0));
    assert!(h.scrolled);
    assert!(!h.on_scroll(400.0));
    assert!(h.on_scroll(0.0));
    assert!(!h.scrolled);
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut h = HeaderState::default();
    h.toggle_menu();
    assert!(h.menu_open);
    h.toggle_menu();
    assert!(!h.menu_open);
    h.toggle_menu();
    h.close_menu();
    assert!(!h.menu_open);
}
