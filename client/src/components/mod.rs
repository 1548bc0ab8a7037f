//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing sections and dashboard chrome while
//! reading and writing shared state from Leptos context providers.

pub mod editable_cell;
pub mod landing;
pub mod notifications;
pub mod sidebar;
pub mod views;
