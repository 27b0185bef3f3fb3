//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching through the gateway
//! from context) and delegates shared chrome to `components`.

pub mod dashboard;
pub mod login;
pub mod players;
pub mod teams;
pub mod waiver_wire;
