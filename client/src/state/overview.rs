//! Overview view data: KPI cards, recent activity, and quick actions.
//!
//! DESIGN
//! ======
//! KPI values are display strings straight from the fixture. When computed
//! aggregates are enabled, the RFQ-derived cards are rebuilt from the RFQ
//! working list instead; the turnaround card has no source list and always
//! keeps its fixture value.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use serde::{Deserialize, Serialize};

use super::nav::NavKey;
use super::notify::NoticeLevel;
use super::rfq::{RfqProject, RfqStatus, average_savings};

/// Which metric a KPI card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiKind {
    TotalRfq,
    AverageSavings,
    ActiveProjects,
    QuoteTurnaround,
}

/// Direction of a KPI change, used only for colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Positive,
    Neutral,
    Negative,
}

impl ChangeKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: u32,
    pub kind: KpiKind,
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_kind: ChangeKind,
    pub icon: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    RfqCompleted,
    SupplierMatched,
    QuoteReceived,
    ExportCompleted,
}

impl ActivityKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::RfqCompleted => "✔",
            Self::SupplierMatched => "⚲",
            Self::QuoteReceived => "✉",
            Self::ExportCompleted => "⇪",
        }
    }
}

/// An entry of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative, pre-rendered ("2 saat önce").
    pub timestamp: String,
    pub tone: NoticeLevel,
}

/// Shortcut card that jumps to another dashboard view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub target: NavKey,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Advisory card used by the discovery and quote views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub body: &'static str,
    /// Label of the inert action button, if the card has one.
    pub action: Option<&'static str>,
}

/// KPI cards for the overview. With `computed` set, the RFQ-derived cards
/// are recalculated from `projects`.
#[must_use]
pub fn overview_kpis(fixture: &[Kpi], projects: &[RfqProject], computed: bool) -> Vec<Kpi> {
    if !computed {
        return fixture.to_vec();
    }
    fixture
        .iter()
        .cloned()
        .map(|mut kpi| {
            match kpi.kind {
                KpiKind::TotalRfq => kpi.value = projects.len().to_string(),
                KpiKind::AverageSavings => kpi.value = format!("%{:.1}", average_savings(projects)),
                KpiKind::ActiveProjects => {
                    kpi.value = projects.iter().filter(|p| p.status == RfqStatus::Active).count().to_string();
                }
                KpiKind::QuoteTurnaround => {}
            }
            kpi
        })
        .collect()
}
