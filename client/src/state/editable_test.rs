use super::*;

// =============================================================
// Validators
// =============================================================

#[test]
fn accept_any_allows_empty() {
    assert_eq!(accept_any("Açıklama", ""), Ok(()));
}

#[test]
fn non_blank_rejects_whitespace() {
    assert_eq!(non_blank("Parça No", "   "), Err(FieldError::Empty { field: "Parça No" }));
    assert_eq!(non_blank("Parça No", "MP-001"), Ok(()));
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn starts_in_viewing() {
    let f = EditableField::new("Birim", accept_any);
    assert_eq!(f.phase(), &EditPhase::Viewing);
    assert!(f.draft().is_none());
}

#[test]
fn begin_seeds_draft_and_update_replaces_it() {
    let mut f = EditableField::new("Birim", accept_any);
    f.begin("adet");
    assert_eq!(f.draft(), Some("adet"));
    f.update("kg");
    assert_eq!(f.draft(), Some("kg"));
}

#[test]
fn begin_twice_keeps_current_draft() {
    let mut f = EditableField::new("Birim", accept_any);
    f.begin("adet");
    f.update("kg");
    f.begin("adet");
    assert_eq!(f.draft(), Some("kg"));
}

#[test]
fn update_while_viewing_is_ignored() {
    let mut f = EditableField::new("Birim", accept_any);
    f.update("kg");
    assert!(!f.is_editing());
}

#[test]
fn save_commits_and_returns_to_viewing() {
    let mut f = EditableField::new("Birim", accept_any);
    f.begin("adet");
    f.update("kg");
    assert_eq!(f.save(), Ok(Some("kg".to_owned())));
    assert!(!f.is_editing());
}

#[test]
fn save_while_viewing_returns_none() {
    let mut f = EditableField::new("Birim", accept_any);
    assert_eq!(f.save(), Ok(None));
}

#[test]
fn rejected_save_keeps_editor_open() {
    let mut f = EditableField::new("Parça No", non_blank);
    f.begin("MP-001");
    f.update(" ");
    assert_eq!(f.save(), Err(FieldError::Empty { field: "Parça No" }));
    assert_eq!(f.draft(), Some(" "));
}

#[test]
fn cancel_discards_draft() {
    let mut f = EditableField::new("Parça No", non_blank);
    f.begin("MP-001");
    f.update("XX");
    f.cancel();
    assert_eq!(f.phase(), &EditPhase::Viewing);
}
