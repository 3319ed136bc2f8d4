//! Typed records for the upstream hospital-records API.
//!
//! The upstream owns every record; this crate only gives them a shape so the aggregator and the
//! desktop client can work with fields instead of loose JSON maps. Date/time values are kept as
//! the upstream strings so they are re-emitted exactly as received.

mod entities;
mod patient_id;

pub use entities::{Admission, Allocation, Employee, NOT_DISCHARGED_SENTINEL};
pub use patient_id::{PatientId, PatientIdError};
