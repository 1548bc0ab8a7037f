//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard view owns one state type here and mutates only its own
//! copy of the fixtures. These types are plain Rust so the domain rules are
//! testable without a browser; components wrap them in `RwSignal`s.

pub mod bom;
pub mod config;
pub mod discovery;
pub mod editable;
pub mod erp;
pub mod landing;
pub mod nav;
pub mod notify;
pub mod overview;
pub mod quotes;
pub mod rfq;

#[cfg(test)]
pub(crate) mod test_helpers;
