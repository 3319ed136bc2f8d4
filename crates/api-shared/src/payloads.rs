//! Reshaped records emitted by the aggregator.
//!
//! Field order here is the order on the wire, so keep it stable.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One admission of a specific patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdmissionSummary {
    #[serde(rename = "admissionId")]
    pub admission_id: i64,
    #[serde(rename = "admissionDate")]
    pub admission_date: String,
    #[serde(rename = "dischargeDate")]
    pub discharge_date: String,
}

/// A patient who has not been discharged yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentAdmission {
    #[serde(rename = "patientID")]
    pub patient_id: i64,
    #[serde(rename = "admissionDate")]
    pub admission_date: String,
}
