//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and route gating while reading shared state
//! from Leptos context providers.

pub mod layout;
pub mod protected;
pub mod stat_card;
