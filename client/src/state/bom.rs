//! BOM view state: the uploaded part list and its local edits.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view works on its own copy of the fixture rows. Uploads, matches,
//! edits, and deletes mutate that copy only; no other dashboard view sees
//! them. Edits are stored as typed; the only refused operation is a second
//! upload while one is still running.

#[cfg(test)]
#[path = "bom_test.rs"]
mod bom_test;

use serde::{Deserialize, Serialize};

use super::editable::{EditableField, FieldError, Validator, accept_any};
use super::notify::{Notice, NoticeSink};
use crate::engine::{FileParser, MatchEngine};

/// Extensions offered by the file picker. Uploaded content is never checked
/// against them.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".csv", ".pdf", ".xlsx", ".xls"];

/// Value for the `accept` attribute of the upload input.
#[must_use]
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Mapping status of a BOM row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BomStatus {
    #[default]
    Pending,
    Mapped,
}

impl BomStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Bekliyor",
            Self::Mapped => "Eşleştirildi",
        }
    }
}

/// One part line of the bill of materials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomItem {
    pub id: u32,
    pub part_number: String,
    pub description: String,
    /// Free text; inline edits are stored verbatim.
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub status: BomStatus,
    pub suppliers: u32,
}

/// Text fields of a BOM row that can be edited inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BomField {
    PartNumber,
    Description,
    Quantity,
    Unit,
    Category,
}

impl BomField {
    pub const ALL: [Self; 5] = [Self::PartNumber, Self::Description, Self::Quantity, Self::Unit, Self::Category];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PartNumber => "Parça No",
            Self::Description => "Açıklama",
            Self::Quantity => "Miktar",
            Self::Unit => "Birim",
            Self::Category => "Kategori",
        }
    }

    /// Validator used by the inline editor. Every column, quantity and
    /// part number included, is stored as typed.
    #[must_use]
    pub fn validator(self) -> Validator {
        accept_any
    }
}

impl BomItem {
    #[must_use]
    pub fn field(&self, field: BomField) -> &str {
        match field {
            BomField::PartNumber => &self.part_number,
            BomField::Description => &self.description,
            BomField::Quantity => &self.quantity,
            BomField::Unit => &self.unit,
            BomField::Category => &self.category,
        }
    }

    pub fn set_field(&mut self, field: BomField, value: String) {
        match field {
            BomField::PartNumber => self.part_number = value,
            BomField::Description => self.description = value,
            BomField::Quantity => self.quantity = value,
            BomField::Unit => self.unit = value,
            BomField::Category => self.category = value,
        }
    }
}

/// Status filter applied to the BOM table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BomStatus),
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Only(BomStatus::Pending), Self::Only(BomStatus::Mapped)];

    #[must_use]
    pub fn allows(self, status: BomStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Tümü",
            Self::Only(status) => status.label(),
        }
    }
}

/// Metadata of a picked file. Content is never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub size_bytes: u64,
}

/// Why an upload could not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{pending} yüklemesi devam ediyor")]
    InProgress { pending: String },
}

/// Inline editor bound to one cell.
#[derive(Clone, Debug)]
pub struct CellEditor {
    pub item_id: u32,
    pub field: BomField,
    pub editor: EditableField,
}

/// Local state of the BOM view.
#[derive(Clone, Debug, Default)]
pub struct BomState {
    pub items: Vec<BomItem>,
    pub search: String,
    pub status_filter: StatusFilter,
    /// File currently being "processed", if any.
    pub pending_upload: Option<UploadFile>,
    pub cell_editor: Option<CellEditor>,
}

impl BomState {
    #[must_use]
    pub fn new(items: Vec<BomItem>) -> Self {
        Self { items, ..Self::default() }
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.pending_upload.is_some()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&BomItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn next_id(&self) -> u32 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| item.status == BomStatus::Pending).count()
    }

    /// Start the simulated upload of `file`. Only one upload runs at a time;
    /// a second request while one is pending is refused with a warning.
    pub fn begin_upload(&mut self, file: UploadFile, sink: &impl NoticeSink) -> Result<(), UploadError> {
        if let Some(pending) = &self.pending_upload {
            let err = UploadError::InProgress { pending: pending.name.clone() };
            log::warn!("bom upload refused: {err}");
            sink.publish(Notice::warning("Yükleme Devam Ediyor", err.to_string()));
            return Err(err);
        }
        log::debug!("bom upload started: {} ({} bytes)", file.name, file.size_bytes);
        self.pending_upload = Some(file);
        Ok(())
    }

    /// Finish the pending upload by appending the rows produced by `parser`.
    /// Returns the number of rows added (zero when nothing was pending).
    pub fn finish_upload(&mut self, parser: &mut impl FileParser, sink: &impl NoticeSink) -> usize {
        let Some(file) = self.pending_upload.take() else {
            return 0;
        };
        let rows = parser.parse(&file, self.next_id());
        let added = rows.len();
        self.items.extend(rows);
        log::debug!("bom upload finished: {} rows from {}", added, file.name);
        sink.publish(Notice::success(
            "Dosya Yüklendi!",
            format!("{} başarıyla yüklendi ve analiz edildi.", file.name),
        ));
        added
    }

    /// Replace one field of the row with `id`. Returns `false` when no row
    /// matches.
    pub fn edit_field(&mut self, id: u32, field: BomField, value: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.set_field(field, value.into());
                true
            }
            None => false,
        }
    }

    /// Open the inline editor on one cell, replacing any editor already open.
    pub fn start_edit(&mut self, id: u32, field: BomField) {
        let Some(item) = self.get(id) else {
            return;
        };
        let mut editor = EditableField::new(field.label(), field.validator());
        editor.begin(item.field(field));
        self.cell_editor = Some(CellEditor { item_id: id, field, editor });
    }

    pub fn edit_draft(&mut self, text: &str) {
        if let Some(cell) = &mut self.cell_editor {
            cell.editor.update(text);
        }
    }

    /// Save the open cell editor into its row. A rejected draft keeps the
    /// editor open and publishes a warning.
    pub fn commit_edit(&mut self, sink: &impl NoticeSink) -> Result<(), FieldError> {
        let Some(mut cell) = self.cell_editor.take() else {
            return Ok(());
        };
        match cell.editor.save() {
            Ok(Some(value)) => {
                self.edit_field(cell.item_id, cell.field, value);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                sink.publish(Notice::warning("Geçersiz Değer", err.to_string()));
                self.cell_editor = Some(cell);
                Err(err)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.cell_editor = None;
    }

    /// Mark one row as mapped with a supplier count from `engine`.
    pub fn match_supplier(&mut self, id: u32, engine: &mut impl MatchEngine, sink: &impl NoticeSink) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        apply_match(item, engine);
        sink.publish(Notice::success("Tedarikçi Eşleştirme Tamamlandı!", "AI ile yeni tedarikçiler bulundu."));
        true
    }

    /// Match every pending row. Publishes an info notice and changes nothing
    /// when no row is pending.
    pub fn bulk_match(&mut self, engine: &mut impl MatchEngine, sink: &impl NoticeSink) -> usize {
        let mut matched = 0;
        for item in self.items.iter_mut().filter(|item| item.status == BomStatus::Pending) {
            apply_match(item, engine);
            matched += 1;
        }
        if matched == 0 {
            sink.publish(Notice::info("Bekleyen Parça Yok", "Tüm parçalar zaten eşleştirilmiş."));
        } else {
            sink.publish(Notice::success(
                "Toplu Eşleştirme Tamamlandı!",
                format!("{matched} parça için tedarikçi bulundu."),
            ));
        }
        matched
    }

    /// Remove the row with `id`. Unknown ids are a no-op.
    pub fn delete_item(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.cell_editor.as_ref().is_some_and(|cell| cell.item_id == id) {
            self.cell_editor = None;
        }
        self.items.len() != before
    }

    /// Rows passing the current search term and status filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&BomItem> {
        filter_items(&self.items, &self.search, self.status_filter)
    }
}

fn apply_match(item: &mut BomItem, engine: &mut impl MatchEngine) {
    item.suppliers = engine.supplier_count(item);
    item.status = BomStatus::Mapped;
}

/// Rows whose part number or description contains `term` (case-insensitive)
/// and whose status passes `status`.
pub fn filter_items<'a>(
    items: impl IntoIterator<Item = &'a BomItem>,
    term: &str,
    status: StatusFilter,
) -> Vec<&'a BomItem> {
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| status.allows(item.status))
        .filter(|item| {
            needle.is_empty()
                || item.part_number.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}
