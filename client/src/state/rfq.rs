//! RFQ management view state and the per-project status machine.
//!
//! DESIGN
//! ======
//! Projects only move forward: `Draft -(send)-> Active -(complete)-> Completed`.
//! Any other action on a status is refused without touching the project.
//! Deletion is allowed from every status and is the only way a project leaves
//! the list.

#[cfg(test)]
#[path = "rfq_test.rs"]
mod rfq_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use super::notify::{Notice, NoticeSink};
use crate::util::format::date_tr;

/// Average savings shown on the stats card when aggregates are not computed
/// from the working list.
pub const FIXTURE_AVERAGE_SAVINGS: f64 = 8.5;
/// Days between creation and the default deadline of a new project.
pub const DEFAULT_DEADLINE_DAYS: i64 = 30;

/// Lifecycle status of an RFQ project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RfqStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

impl RfqStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Taslak",
            Self::Active => "Aktif",
            Self::Completed => "Tamamlandı",
        }
    }

    /// Status reached by applying `action`, if the transition is legal.
    #[must_use]
    pub fn next(self, action: RfqAction) -> Option<Self> {
        match (self, action) {
            (Self::Draft, RfqAction::Send) => Some(Self::Active),
            (Self::Active, RfqAction::Complete) => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for RfqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forward transitions exposed by the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RfqAction {
    Send,
    Complete,
}

impl fmt::Display for RfqAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Send => "gönder",
            Self::Complete => "tamamla",
        })
    }
}

/// Failures of RFQ operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RfqError {
    #[error("Proje adı boş bırakılamaz.")]
    BlankName,
    #[error("RFQ #{id} bulunamadı.")]
    NotFound { id: u32 },
    #[error("{from} durumundaki RFQ #{id} için '{action}' uygulanamaz.")]
    InvalidTransition { id: u32, from: RfqStatus, action: RfqAction },
}

/// One request-for-quote project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RfqProject {
    pub id: u32,
    pub project_name: String,
    pub status: RfqStatus,
    pub total_items: u32,
    pub suppliers_contacted: u32,
    pub quotes_received: u32,
    pub deadline: Date,
    /// Estimated savings in percent; `None` until quotes are evaluated.
    pub estimated_savings: Option<f64>,
    pub created_at: Date,
}

impl RfqProject {
    /// Active projects whose deadline is already behind `today`.
    #[must_use]
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status == RfqStatus::Active && self.deadline < today
    }

    /// Share of contacted suppliers that answered, rounded to a percent.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.suppliers_contacted == 0 {
            return 0;
        }
        let ratio = f64::from(self.quotes_received) / f64::from(self.suppliers_contacted);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (ratio * 100.0).round().max(0.0) as u32;
        percent
    }
}

/// Stats cards above the project table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RfqStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub average_savings: f64,
}

/// Local state of the RFQ management view.
#[derive(Clone, Debug, Default)]
pub struct RfqState {
    pub projects: Vec<RfqProject>,
}

impl RfqState {
    #[must_use]
    pub fn new(projects: Vec<RfqProject>) -> Self {
        Self { projects }
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&RfqProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn next_id(&self) -> u32 {
        self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Insert a new draft project at the top of the list.
    ///
    /// A blank name is refused with a warning and leaves the list unchanged.
    pub fn create(
        &mut self,
        name: &str,
        total_items: u32,
        deadline: Date,
        today: Date,
        sink: &impl NoticeSink,
    ) -> Result<u32, RfqError> {
        let name = name.trim();
        if name.is_empty() {
            let err = RfqError::BlankName;
            sink.publish(Notice::warning("Eksik Bilgi", err.to_string()));
            return Err(err);
        }
        let id = self.next_id();
        self.projects.insert(
            0,
            RfqProject {
                id,
                project_name: name.to_owned(),
                status: RfqStatus::Draft,
                total_items,
                suppliers_contacted: 0,
                quotes_received: 0,
                deadline,
                estimated_savings: None,
                created_at: today,
            },
        );
        log::debug!("rfq #{id} created: {name}");
        sink.publish(Notice::success(
            "RFQ Oluşturuldu!",
            format!("{name} taslak olarak kaydedildi. Son tarih: {}", date_tr(deadline)),
        ));
        Ok(id)
    }

    /// Move a draft project to active.
    pub fn send(&mut self, id: u32, sink: &impl NoticeSink) -> Result<(), RfqError> {
        self.transition(id, RfqAction::Send, sink)
    }

    /// Move an active project to completed.
    pub fn complete(&mut self, id: u32, sink: &impl NoticeSink) -> Result<(), RfqError> {
        self.transition(id, RfqAction::Complete, sink)
    }

    fn transition(&mut self, id: u32, action: RfqAction, sink: &impl NoticeSink) -> Result<(), RfqError> {
        let project = self.projects.iter_mut().find(|p| p.id == id).ok_or(RfqError::NotFound { id })?;
        let from = project.status;
        let Some(to) = from.next(action) else {
            let err = RfqError::InvalidTransition { id, from, action };
            log::warn!("rfq transition refused: {err}");
            sink.publish(Notice::warning("İşlem Yapılamadı", err.to_string()));
            return Err(err);
        };
        project.status = to;
        log::debug!("rfq #{id}: {from:?} -> {to:?}");
        let (title, verb) = match action {
            RfqAction::Send => ("RFQ Gönderildi!", "tedarikçilere gönderildi"),
            RfqAction::Complete => ("RFQ Tamamlandı!", "tamamlandı olarak işaretlendi"),
        };
        sink.publish(Notice::success(title, format!("{} {verb}.", project.project_name)));
        Ok(())
    }

    /// Remove a project in any status. Unknown ids are a no-op.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    /// Stats over the current list. The savings card shows the fixture figure
    /// unless `computed` asks for the average over the list.
    #[must_use]
    pub fn stats(&self, computed: bool) -> RfqStats {
        RfqStats {
            total: self.projects.len(),
            active: self.projects.iter().filter(|p| p.status == RfqStatus::Active).count(),
            completed: self.projects.iter().filter(|p| p.status == RfqStatus::Completed).count(),
            average_savings: if computed { average_savings(&self.projects) } else { FIXTURE_AVERAGE_SAVINGS },
        }
    }
}

/// Mean of the recorded savings; projects without savings are skipped and an
/// empty set yields 0.
#[must_use]
pub fn average_savings(projects: &[RfqProject]) -> f64 {
    let recorded: Vec<f64> = projects.iter().filter_map(|p| p.estimated_savings).collect();
    if recorded.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = recorded.len() as f64;
    recorded.iter().sum::<f64>() / count
}

/// Part count stored for the create form's raw input. Fractions are
/// truncated, while negative, blank, and non-numeric input count as zero.
#[must_use]
pub fn parse_item_count(raw: &str) -> u32 {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return 0;
    };
    if !value.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value.trunc().clamp(0.0, f64::from(u32::MAX)) as u32;
    count
}

/// Deadline offered by the create form.
#[must_use]
pub fn default_deadline(today: Date) -> Date {
    today.saturating_add(Duration::days(DEFAULT_DEADLINE_DAYS))
}
