//! Quote matrix: per-part ranking of supplier quotes.
//!
//! The view is pure derived data. Scores come from the `ScoringEngine` (the
//! fixture value by default); the criterion weights are display-only and are
//! never applied arithmetically.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use serde::{Deserialize, Serialize};

use super::discovery::ScoreBand;
use crate::engine::ScoringEngine;

/// One supplier quote for a part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u32,
    pub part_number: String,
    pub supplier: String,
    pub price: f64,
    pub lead_time_days: u32,
    pub capacity: String,
    pub quality: String,
    pub total_score: u8,
    pub price_score: u8,
    pub time_score: u8,
    pub capacity_score: u8,
    pub quality_score: u8,
    pub risk_score: u8,
}

/// Scoring criteria shown in the matrix header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
    Price,
    LeadTime,
    Capacity,
    Quality,
    Risk,
}

impl Criterion {
    pub const ALL: [Self; 5] = [Self::Price, Self::LeadTime, Self::Capacity, Self::Quality, Self::Risk];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "Fiyat",
            Self::LeadTime => "Teslimat",
            Self::Capacity => "Kapasite",
            Self::Quality => "Kalite",
            Self::Risk => "Risk",
        }
    }

    /// Advertised weight in percent.
    #[must_use]
    pub fn weight_percent(self) -> u8 {
        match self {
            Self::Price => 30,
            Self::LeadTime => 25,
            Self::Capacity => 20,
            Self::Quality => 15,
            Self::Risk => 10,
        }
    }
}

impl Quote {
    #[must_use]
    pub fn sub_score(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Price => self.price_score,
            Criterion::LeadTime => self.time_score,
            Criterion::Capacity => self.capacity_score,
            Criterion::Quality => self.quality_score,
            Criterion::Risk => self.risk_score,
        }
    }
}

/// Podium badge for the three best quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    First,
    Second,
    Third,
}

impl RankBadge {
    /// Badge for a zero-based row position; rows past the third get none.
    #[must_use]
    pub fn for_position(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1. Sıra",
            Self::Second => "2. Sıra",
            Self::Third => "3. Sıra",
        }
    }
}

/// A quote row in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedQuote<'a> {
    pub quote: &'a Quote,
    pub score: u8,
    pub badge: Option<RankBadge>,
}

impl RankedQuote<'_> {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// Local state of the quote matrix view.
#[derive(Clone, Debug, Default)]
pub struct QuoteMatrixState {
    pub quotes: Vec<Quote>,
    pub selected_part: String,
}

impl QuoteMatrixState {
    /// Seed the view, preselecting the first part number in the list.
    #[must_use]
    pub fn new(quotes: Vec<Quote>) -> Self {
        let selected_part = quotes.first().map(|q| q.part_number.clone()).unwrap_or_default();
        Self { quotes, selected_part }
    }

    /// Distinct part numbers in first-seen order.
    #[must_use]
    pub fn part_numbers(&self) -> Vec<&str> {
        let mut parts: Vec<&str> = Vec::new();
        for quote in &self.quotes {
            if !parts.contains(&quote.part_number.as_str()) {
                parts.push(&quote.part_number);
            }
        }
        parts
    }

    pub fn select_part(&mut self, part: &str) {
        part.clone_into(&mut self.selected_part);
    }

    /// Quotes for the selected part, best score first. Ties keep fixture
    /// order.
    #[must_use]
    pub fn ranked(&self, engine: &impl ScoringEngine) -> Vec<RankedQuote<'_>> {
        rank_quotes(&self.quotes, &self.selected_part, engine)
    }
}

/// Filter `quotes` to `part`, sort by score descending, and badge the top
/// three rows.
pub fn rank_quotes<'a>(quotes: &'a [Quote], part: &str, engine: &impl ScoringEngine) -> Vec<RankedQuote<'a>> {
    let mut rows: Vec<(&Quote, u8)> = quotes
        .iter()
        .filter(|q| q.part_number == part)
        .map(|q| (q, engine.total_score(q)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .enumerate()
        .map(|(index, (quote, score))| RankedQuote { quote, score, badge: RankBadge::for_position(index) })
        .collect()
}
