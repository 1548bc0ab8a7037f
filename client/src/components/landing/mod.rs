//! Sections of the marketing landing page, top to bottom.

pub mod benefits;
pub mod demo_section;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
