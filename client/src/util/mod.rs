//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (clock, timers, DOM, storage) lives here behind `hydrate`
//! gates so state and components stay renderable on the server.

pub mod clock;
pub mod dom;
pub mod format;
pub mod storage;
