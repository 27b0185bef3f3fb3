//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gating decisions and stat formatting, kept out of page code so they
//! run in native tests.

pub mod format;
pub mod guard;
