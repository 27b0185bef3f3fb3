//! Networking modules for the Sleepr REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single outbound path and owns the auth policy,
//! `middleware` holds its request/response steps, `transport` abstracts the
//! browser `fetch` backend, `api` exposes typed endpoints, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
