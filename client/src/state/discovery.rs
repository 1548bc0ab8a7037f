//! Supplier discovery view state: search, category filter, sort, and the
//! transient favorite / contacted / selected marks.
//!
//! DESIGN
//! ======
//! The supplier list itself never changes. Every mark lives in a set keyed by
//! supplier id and is discarded when the view is left.

#[cfg(test)]
#[path = "discovery_test.rs"]
mod discovery_test;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::notify::{Notice, NoticeSink};

/// Category chips shown above the grid. `all` disables the filter.
pub const CATEGORIES: [&str; 6] = ["all", "Döküm", "Plastik", "Elektronik", "CNC", "Montaj"];
pub const ALL_CATEGORIES: &str = "all";

/// A supplier record from the discovery directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rating: f32,
    pub specialties: Vec<String>,
    pub response_time_hours: u32,
    pub certifications: Vec<String>,
    pub match_score: u8,
    pub contact_person: String,
}

/// Match-score colour band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    /// 90 and above is high, 80 and above medium, the rest low.
    #[must_use]
    pub fn of(score: u8) -> Self {
        if score >= 90 {
            Self::High
        } else if score >= 80 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Supplier {
    /// Filled star count for the rating widget (0..=5).
    #[must_use]
    pub fn full_stars(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = self.rating.clamp(0.0, 5.0).floor() as usize;
        stars
    }

    #[must_use]
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::of(self.match_score)
    }
}

/// Sort order of the supplier grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierSort {
    #[default]
    MatchScore,
    Rating,
    ResponseTime,
    Name,
}

impl SupplierSort {
    pub const ALL: [Self; 4] = [Self::MatchScore, Self::Rating, Self::ResponseTime, Self::Name];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MatchScore => "Eşleşme Skoru",
            Self::Rating => "Puan",
            Self::ResponseTime => "Yanıt Süresi",
            Self::Name => "İsim",
        }
    }

    #[must_use]
    pub fn compare(self, a: &Supplier, b: &Supplier) -> Ordering {
        match self {
            Self::MatchScore => b.match_score.cmp(&a.match_score),
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::ResponseTime => a.response_time_hours.cmp(&b.response_time_hours),
            Self::Name => a.name.cmp(&b.name),
        }
    }
}

/// Why a bulk RFQ send was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Lütfen en az bir tedarikçi seçin.")]
    EmptySelection,
}

/// Local state of the supplier discovery view.
#[derive(Clone, Debug)]
pub struct DiscoveryState {
    pub suppliers: Vec<Supplier>,
    pub search: String,
    pub category: String,
    pub sort: SupplierSort,
    pub favorites: BTreeSet<u32>,
    pub contacted: BTreeSet<u32>,
    pub selected: BTreeSet<u32>,
}

impl Default for DiscoveryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl DiscoveryState {
    #[must_use]
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self {
            suppliers,
            search: String::new(),
            category: ALL_CATEGORIES.to_owned(),
            sort: SupplierSort::default(),
            favorites: BTreeSet::new(),
            contacted: BTreeSet::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn search(&mut self, term: &str) {
        term.clone_into(&mut self.search);
    }

    pub fn filter_by_category(&mut self, category: &str) {
        category.clone_into(&mut self.category);
    }

    pub fn sort_by(&mut self, sort: SupplierSort) {
        self.sort = sort;
    }

    /// Suppliers passing search and category, in the current sort order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Supplier> {
        let mut rows: Vec<&Supplier> = self
            .suppliers
            .iter()
            .filter(|s| matches_search(s, &self.search) && matches_category(s, &self.category))
            .collect();
        sort_suppliers(&mut rows, self.sort);
        rows
    }

    /// Flip the favorite mark. Returns the new state.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        toggle(&mut self.favorites, id)
    }

    /// Flip the bulk-send selection. Returns the new state.
    pub fn toggle_selected(&mut self, id: u32) -> bool {
        toggle(&mut self.selected, id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    #[must_use]
    pub fn is_contacted(&self, id: u32) -> bool {
        self.contacted.contains(&id)
    }

    #[must_use]
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// Record a contact with one supplier.
    pub fn mark_contacted(&mut self, id: u32, sink: &impl NoticeSink) {
        let Some(supplier) = self.suppliers.iter().find(|s| s.id == id) else {
            return;
        };
        self.contacted.insert(id);
        sink.publish(Notice::success(
            "İletişim Kaydedildi",
            format!("{} ile iletişime geçildi ({}).", supplier.name, supplier.contact_person),
        ));
    }

    /// Send an RFQ to every selected supplier, mark them contacted, and clear
    /// the selection. An empty selection is refused with a warning.
    pub fn bulk_send_rfq(&mut self, sink: &impl NoticeSink) -> Result<usize, DiscoveryError> {
        if self.selected.is_empty() {
            let err = DiscoveryError::EmptySelection;
            sink.publish(Notice::warning("Tedarikçi Seçilmedi", err.to_string()));
            return Err(err);
        }
        let sent = self.selected.len();
        self.contacted.append(&mut self.selected);
        log::debug!("rfq sent to {sent} suppliers");
        sink.publish(Notice::success("RFQ Gönderildi!", format!("{sent} tedarikçiye teklif talebi gönderildi.")));
        Ok(sent)
    }
}

fn toggle(set: &mut BTreeSet<u32>, id: u32) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}

/// Case-insensitive substring match against name, location, or any specialty.
#[must_use]
pub fn matches_search(supplier: &Supplier, term: &str) -> bool {
    let needle = term.to_lowercase();
    supplier.name.to_lowercase().contains(&needle)
        || supplier.location.to_lowercase().contains(&needle)
        || supplier.specialties.iter().any(|s| s.to_lowercase().contains(&needle))
}

/// `all` matches everything; otherwise the category must equal one specialty.
#[must_use]
pub fn matches_category(supplier: &Supplier, category: &str) -> bool {
    category == ALL_CATEGORIES || supplier.specialties.iter().any(|s| s == category)
}

/// Stable sort by `sort`; ties keep their input order.
pub fn sort_suppliers(rows: &mut [&Supplier], sort: SupplierSort) {
    rows.sort_by(|a, b| sort.compare(a, b));
}
