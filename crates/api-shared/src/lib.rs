//! # API Shared
//!
//! Shared definitions for the hospital aggregator API.
//!
//! Contains:
//! - Reshaped response payloads (`payloads` module)
//! - Shared services like `HealthService`
//!
//! Used by `hospital-core` to build responses, by `api-rest` to document them, and by the
//! desktop client to read them back.

pub mod health;
pub mod payloads;

pub use health::{HealthRes, HealthService};
pub use payloads::{AdmissionSummary, CurrentAdmission};
