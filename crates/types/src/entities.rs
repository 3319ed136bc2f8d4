use serde::{Deserialize, Serialize};

/// Discharge date the upstream uses for an admission that is still open.
pub const NOT_DISCHARGED_SENTINEL: &str = "0001-01-01T00:00:00";

/// A hospital stay for a single patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub id: i64,
    #[serde(rename = "admissionDate")]
    pub admission_date: String,
    #[serde(rename = "dischargeDate")]
    pub discharge_date: String,
    #[serde(rename = "patientID")]
    pub patient_id: i64,
}

impl Admission {
    /// Returns true while the admission still carries the "not yet discharged" sentinel.
    pub fn is_current(&self) -> bool {
        self.discharge_date == NOT_DISCHARGED_SENTINEL
    }

    /// Matches the owning patient against free-form text.
    ///
    /// The comparison is on the decimal rendering of `patientID`, so inputs such as `"05"`,
    /// `"2.0"` or `"A"` never match and never fail.
    pub fn belongs_to(&self, patient_id: &str) -> bool {
        self.patient_id.to_string() == patient_id
    }
}

/// Assignment of an employee to an admission for a time interval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: i64,
    #[serde(rename = "admissionID")]
    pub admission_id: i64,
    #[serde(rename = "employeeID")]
    pub employee_id: i64,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

/// A member of staff.
///
/// Fields the upstream adds beyond `id`, `surname` and `forename` are carried in `extra` so the
/// record is returned whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub surname: String,
    pub forename: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
