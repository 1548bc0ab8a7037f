//! Pluggable seams for the behaviors the demo only simulates.
//!
//! SYSTEM CONTEXT
//! ==============
//! File parsing, supplier matching, quote scoring, and ERP encoding are not
//! real algorithms in this product. Each one sits behind a trait so a view
//! depends on the seam, and `mock` supplies the fixture-backed defaults the
//! dashboard ships with.

pub mod mock;

use crate::state::bom::{BomItem, UploadFile};
use crate::state::erp::{EncodedExport, ExportRequest};
use crate::state::quotes::Quote;

/// Turns an uploaded file into BOM rows.
pub trait FileParser {
    /// Produce rows for `file`, numbering them from `first_id` upward.
    fn parse(&mut self, file: &UploadFile, first_id: u32) -> Vec<BomItem>;
}

/// Finds candidate suppliers for a BOM row.
pub trait MatchEngine {
    /// Number of suppliers matched to `item`.
    fn supplier_count(&mut self, item: &BomItem) -> u32;
}

/// Produces the ranking score of a quote.
pub trait ScoringEngine {
    fn total_score(&self, quote: &Quote) -> u8;
}

/// Encodes an export request into an ERP payload.
pub trait ExportEncoder {
    fn encode(&mut self, request: &ExportRequest) -> EncodedExport;
}
