use super::*;
use crate::engine::mock::MockExportEncoder;
use crate::fixtures::dashboard;
use crate::state::notify::NoticeLevel;
use crate::state::test_helpers::RecordingSink;
use time::macros::datetime;

const NOW: PrimitiveDateTime = datetime!(2024-05-06 10:30);

struct FixedEncoder;

impl ExportEncoder for FixedEncoder {
    fn encode(&mut self, request: &ExportRequest) -> EncodedExport {
        EncodedExport { records: u32::try_from(request.fields.len()).unwrap_or(0) * 10, size_mb: 1.5 }
    }
}

// =============================================================
// validation
// =============================================================

#[test]
fn export_without_format_creates_nothing_and_warns() {
    let mut state = ErpState::new(dashboard::erp_exports());
    let sink = RecordingSink::default();
    let err = state.run_export(None, &[ExportField::Price], &sink).unwrap_err();
    assert_eq!(err, ExportError::NoFormat);
    assert!(!state.is_exporting());
    assert_eq!(state.exports.len(), 3);
    assert_eq!(sink.levels(), vec![NoticeLevel::Warning]);
    assert_eq!(sink.notices.borrow()[0].title, "Format Seçin");
}

#[test]
fn second_export_while_pending_is_refused() {
    let mut state = ErpState::default();
    let sink = RecordingSink::default();
    state.run_export(Some(ErpFormat::Sap), &[], &sink).unwrap();
    let err = state.begin_export(&sink).unwrap_err();
    assert_eq!(err, ExportError::InProgress);
    assert_eq!(sink.last_level(), Some(NoticeLevel::Warning));
}

// =============================================================
// fields
// =============================================================

#[test]
fn required_fields_cannot_be_unchecked() {
    let mut state = ErpState::default();
    state.toggle_field(ExportField::PartNumber);
    state.toggle_field(ExportField::Supplier);
    assert!(state.is_field_checked(ExportField::PartNumber));
    assert!(state.is_field_checked(ExportField::Supplier));
    assert_eq!(state.selected_fields(), vec![ExportField::PartNumber, ExportField::Supplier]);
}

#[test]
fn optional_fields_toggle_and_keep_display_order() {
    let mut state = ErpState::default();
    state.toggle_field(ExportField::Certificates);
    state.toggle_field(ExportField::Price);
    state.toggle_field(ExportField::Quality);
    state.toggle_field(ExportField::Quality);
    assert_eq!(
        state.selected_fields(),
        vec![ExportField::PartNumber, ExportField::Supplier, ExportField::Price, ExportField::Certificates]
    );
}

#[test]
fn run_export_always_includes_required_fields() {
    let mut state = ErpState::default();
    let sink = RecordingSink::default();
    let request = state.run_export(Some(ErpFormat::Logo), &[ExportField::LeadTime], &sink).unwrap();
    assert_eq!(request.format, ErpFormat::Logo);
    assert_eq!(request.fields, vec![ExportField::PartNumber, ExportField::Supplier, ExportField::LeadTime]);
}

// =============================================================
// completion
// =============================================================

#[test]
fn finish_export_prepends_completed_row_and_resets_format() {
    let mut state = ErpState::new(dashboard::erp_exports());
    let sink = RecordingSink::default();
    state.run_export(Some(ErpFormat::Netsis), &[ExportField::Price], &sink).unwrap();
    let id = state.finish_export(&mut FixedEncoder, NOW, &sink).unwrap();

    assert_eq!(id, 4);
    let row = &state.exports[0];
    assert_eq!(row.id, 4);
    assert_eq!(row.name, "Export 06.05.2024");
    assert_eq!(row.format, ErpFormat::Netsis);
    assert_eq!(row.records, 30);
    assert_eq!(row.status, ExportStatus::Completed);
    assert_eq!(row.created_at, NOW);
    assert_eq!(state.exports.len(), 4);
    assert_eq!(state.selected_format, None);
    assert!(!state.is_exporting());
    assert_eq!(sink.last_level(), Some(NoticeLevel::Success));
    assert!(sink.notices.borrow()[0].description.contains("30 kayıt"));
}

#[test]
fn finish_without_pending_export_is_noop() {
    let mut state = ErpState::new(dashboard::erp_exports());
    let sink = RecordingSink::default();
    assert_eq!(state.finish_export(&mut FixedEncoder, NOW, &sink), None);
    assert_eq!(state.exports.len(), 3);
    assert_eq!(sink.count(), 0);
}

#[test]
fn mock_encoder_output_lands_on_history_row() {
    let mut state = ErpState::default();
    let sink = RecordingSink::default();
    state.run_export(Some(ErpFormat::Custom), &[], &sink).unwrap();
    state.finish_export(&mut MockExportEncoder::seeded(11), NOW, &sink).unwrap();
    let row = &state.exports[0];
    assert_eq!(row.id, 1);
    assert!((10..=59).contains(&row.records));
    assert!((1.0..=4.0).contains(&row.size_mb));
}

#[test]
fn only_completed_rows_are_downloadable() {
    let rows = dashboard::erp_exports();
    let flags: Vec<bool> = rows.iter().map(ErpExport::downloadable).collect();
    assert_eq!(flags, vec![true, true, false]);
}
