//! ERP export view state: format and field selection plus export history.
//!
//! SYSTEM CONTEXT
//! ==============
//! No file is produced. An export is a history row whose record count and
//! size come from the `ExportEncoder`. Only one export runs at a time; the
//! trigger is refused while one is pending.

#[cfg(test)]
#[path = "erp_test.rs"]
mod erp_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use super::notify::{Notice, NoticeSink};
use crate::engine::ExportEncoder;
use crate::util::format::date_tr;

/// Target ERP format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErpFormat {
    Sap,
    Netsis,
    Logo,
    Custom,
}

impl ErpFormat {
    pub const ALL: [Self; 4] = [Self::Sap, Self::Netsis, Self::Logo, Self::Custom];

    /// Short code shown in the history table.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Sap => "SAP",
            Self::Netsis => "Netsis",
            Self::Logo => "Logo",
            Self::Custom => "Custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sap => "SAP R/3",
            Self::Netsis => "Netsis ERP",
            Self::Logo => "Logo Tiger",
            Self::Custom => "Özel Format",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Sap => "SAP standart format (.csv)",
            Self::Netsis => "Netsis uyumlu format (.txt)",
            Self::Logo => "Logo ERP format (.xml)",
            Self::Custom => "Özelleştirilebilir format",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Sap => "🔷",
            Self::Netsis => "🔶",
            Self::Logo => "🔸",
            Self::Custom => "⚙",
        }
    }
}

/// Processing status of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStatus {
    Completed,
    Processing,
    Failed,
}

impl ExportStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Tamamlandı",
            Self::Processing => "İşleniyor",
            Self::Failed => "Başarısız",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Processing => "processing",
            Self::Failed => "failed",
        }
    }
}

/// Quote attributes that can be included in an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExportField {
    PartNumber,
    Supplier,
    Price,
    LeadTime,
    Capacity,
    Quality,
    Certificates,
}

impl ExportField {
    pub const ALL: [Self; 7] = [
        Self::PartNumber,
        Self::Supplier,
        Self::Price,
        Self::LeadTime,
        Self::Capacity,
        Self::Quality,
        Self::Certificates,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PartNumber => "Parça Numarası",
            Self::Supplier => "Tedarikçi Bilgileri",
            Self::Price => "Fiyat Bilgileri",
            Self::LeadTime => "Teslimat Süresi",
            Self::Capacity => "Kapasite Bilgileri",
            Self::Quality => "Kalite Notları",
            Self::Certificates => "Sertifikalar",
        }
    }

    /// Required fields are always exported and cannot be unchecked.
    #[must_use]
    pub fn required(self) -> bool {
        matches!(self, Self::PartNumber | Self::Supplier)
    }
}

/// One row of the export history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErpExport {
    pub id: u32,
    pub name: String,
    pub format: ErpFormat,
    pub records: u32,
    pub size_mb: f64,
    pub created_at: PrimitiveDateTime,
    pub status: ExportStatus,
}

impl ErpExport {
    /// Download controls are rendered for completed rows but never fetch
    /// anything.
    #[must_use]
    pub fn downloadable(&self) -> bool {
        self.status == ExportStatus::Completed
    }
}

/// What the encoder is asked to export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ErpFormat,
    pub fields: Vec<ExportField>,
}

/// Encoder output recorded on the history row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodedExport {
    pub records: u32,
    pub size_mb: f64,
}

/// Why an export could not start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("Lütfen bir ERP format seçin.")]
    NoFormat,
    #[error("Önceki export henüz tamamlanmadı.")]
    InProgress,
}

/// Local state of the ERP export view.
#[derive(Clone, Debug, Default)]
pub struct ErpState {
    pub exports: Vec<ErpExport>,
    pub selected_format: Option<ErpFormat>,
    /// Optional fields the user ticked. Required fields are implied.
    pub optional_fields: BTreeSet<ExportField>,
    pub pending: Option<ExportRequest>,
}

impl ErpState {
    #[must_use]
    pub fn new(exports: Vec<ErpExport>) -> Self {
        Self { exports, ..Self::default() }
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select_format(&mut self, format: ErpFormat) {
        self.selected_format = Some(format);
    }

    /// Tick or untick an optional field. Required fields ignore the toggle.
    pub fn toggle_field(&mut self, field: ExportField) {
        if field.required() {
            return;
        }
        if !self.optional_fields.remove(&field) {
            self.optional_fields.insert(field);
        }
    }

    #[must_use]
    pub fn is_field_checked(&self, field: ExportField) -> bool {
        field.required() || self.optional_fields.contains(&field)
    }

    /// Required fields plus the ticked optional ones, in display order.
    #[must_use]
    pub fn selected_fields(&self) -> Vec<ExportField> {
        ExportField::ALL.into_iter().filter(|f| self.is_field_checked(*f)).collect()
    }

    /// Apply a format and field choice, then start the export.
    pub fn run_export(
        &mut self,
        format: Option<ErpFormat>,
        fields: &[ExportField],
        sink: &impl NoticeSink,
    ) -> Result<ExportRequest, ExportError> {
        self.selected_format = format;
        self.optional_fields = fields.iter().copied().filter(|f| !f.required()).collect();
        self.begin_export(sink)
    }

    /// Start an export with the current selection. Refused with a warning
    /// when no format is chosen or another export is still running.
    pub fn begin_export(&mut self, sink: &impl NoticeSink) -> Result<ExportRequest, ExportError> {
        let Some(format) = self.selected_format else {
            let err = ExportError::NoFormat;
            sink.publish(Notice::warning("Format Seçin", err.to_string()));
            return Err(err);
        };
        if self.pending.is_some() {
            let err = ExportError::InProgress;
            sink.publish(Notice::warning("Export Devam Ediyor", err.to_string()));
            return Err(err);
        }
        let request = ExportRequest { format, fields: self.selected_fields() };
        log::debug!("erp export started: {} with {} fields", format.code(), request.fields.len());
        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Complete the pending export: encode it, prepend a completed history
    /// row, and reset the format choice. Returns the new row id.
    pub fn finish_export(
        &mut self,
        encoder: &mut impl ExportEncoder,
        now: PrimitiveDateTime,
        sink: &impl NoticeSink,
    ) -> Option<u32> {
        let request = self.pending.take()?;
        let encoded = encoder.encode(&request);
        let id = self.exports.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.exports.insert(
            0,
            ErpExport {
                id,
                name: format!("Export {}", date_tr(now.date())),
                format: request.format,
                records: encoded.records,
                size_mb: encoded.size_mb,
                created_at: now,
                status: ExportStatus::Completed,
            },
        );
        self.selected_format = None;
        sink.publish(Notice::success(
            "Export Tamamlandı!",
            format!("{} formatında {} kayıt başarıyla export edildi.", request.format.code(), encoded.records),
        ));
        Some(id)
    }
}
