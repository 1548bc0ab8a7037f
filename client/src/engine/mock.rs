//! Fixture-backed engine implementations used by the demo dashboard.
//!
//! Randomized engines take an explicit `u64` seed; the browser seeds them from
//! the clock and tests seed them with constants.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{ExportEncoder, FileParser, MatchEngine, ScoringEngine};
use crate::state::bom::{BomItem, BomStatus, UploadFile};
use crate::state::erp::{EncodedExport, ExportRequest};
use crate::state::quotes::Quote;

/// Upper bound on rows fabricated from one upload.
pub const MAX_ROWS_PER_UPLOAD: u32 = 3;
/// Inclusive bounds for a simulated supplier match.
pub const MATCH_SUPPLIERS_MIN: u32 = 3;
pub const MATCH_SUPPLIERS_MAX: u32 = 12;
/// Inclusive bounds for a simulated export record count.
pub const EXPORT_RECORDS_MIN: u32 = 10;
pub const EXPORT_RECORDS_MAX: u32 = 59;

const MOCK_QUANTITIES: [u32; 5] = [50, 100, 250, 500, 1000];
const MOCK_CATEGORIES: [&str; 4] = ["Genel", "Döküm", "Plastik", "Elektronik"];

/// Fabricates pending BOM rows named after the uploaded file. File content is
/// never read.
#[derive(Clone, Debug)]
pub struct MockFileParser {
    rng: SmallRng,
}

impl MockFileParser {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl FileParser for MockFileParser {
    fn parse(&mut self, file: &UploadFile, first_id: u32) -> Vec<BomItem> {
        let rows = self.rng.random_range(1..=MAX_ROWS_PER_UPLOAD);
        (0..rows)
            .map(|offset| {
                let id = first_id + offset;
                let quantity = MOCK_QUANTITIES[self.rng.random_range(0..MOCK_QUANTITIES.len())];
                let category = MOCK_CATEGORIES[self.rng.random_range(0..MOCK_CATEGORIES.len())];
                BomItem {
                    id,
                    part_number: format!("NP-{id:03}"),
                    description: format!("{} - Yeni Parça", file.name),
                    quantity: quantity.to_string(),
                    unit: "adet".to_owned(),
                    category: category.to_owned(),
                    status: BomStatus::Pending,
                    suppliers: 0,
                }
            })
            .collect()
    }
}

/// Picks a random supplier count in `MATCH_SUPPLIERS_MIN..=MATCH_SUPPLIERS_MAX`.
#[derive(Clone, Debug)]
pub struct MockMatchEngine {
    rng: SmallRng,
}

impl MockMatchEngine {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl MatchEngine for MockMatchEngine {
    fn supplier_count(&mut self, _item: &BomItem) -> u32 {
        self.rng.random_range(MATCH_SUPPLIERS_MIN..=MATCH_SUPPLIERS_MAX)
    }
}

/// Reads the score stored on the quote fixture.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureScoring;

impl ScoringEngine for FixtureScoring {
    fn total_score(&self, quote: &Quote) -> u8 {
        quote.total_score
    }
}

/// Reports a random record count and a file size between 1.0 and 4.0 MB.
#[derive(Clone, Debug)]
pub struct MockExportEncoder {
    rng: SmallRng,
}

impl MockExportEncoder {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl ExportEncoder for MockExportEncoder {
    fn encode(&mut self, _request: &ExportRequest) -> EncodedExport {
        let records = self.rng.random_range(EXPORT_RECORDS_MIN..=EXPORT_RECORDS_MAX);
        let raw_mb = 1.0 + self.rng.random::<f64>() * 3.0;
        EncodedExport { records, size_mb: (raw_mb * 10.0).round() / 10.0 }
    }
}
