//! Hard-coded demo content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product has no backend data. `dashboard` seeds each view's working
//! list and `landing` holds the marketing copy.

pub mod dashboard;
pub mod landing;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;
