//! The "Admissions for Specific Patient" form.
//!
//! Two states: idle until the first successful lookup, populated afterwards. A submit either
//! replaces the table or raises a [`Notice`]; a notice never changes the state.

use api_shared::AdmissionSummary;
use hospital_types::{PatientId, PatientIdError};

use crate::backend::AdmissionsSource;

/// One table row, already rendered as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdmissionRow {
    pub admission_id: String,
    pub admission_date: String,
    pub discharge_date: String,
}

impl From<AdmissionSummary> for AdmissionRow {
    fn from(summary: AdmissionSummary) -> Self {
        Self {
            admission_id: summary.admission_id.to_string(),
            admission_date: summary.admission_date,
            discharge_date: summary.discharge_date,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    /// Waiting for the first lookup.
    #[default]
    Idle,
    /// Showing the admissions of `patient_id`.
    Populated {
        patient_id: PatientId,
        rows: Vec<AdmissionRow>,
    },
}

/// A modal message raised by a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The input was rejected before any request was made.
    InvalidInput(PatientIdError),
    /// The backend had nothing to show, or could not be reached.
    NoAdmissions(PatientId),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::InvalidInput(_) => "Error",
            Notice::NoAdmissions(_) => "No Admissions",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InvalidInput(e) => write!(f, "{e}"),
            Notice::NoAdmissions(id) => write!(f, "No admissions found for patient: {id}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct AdmissionsForm {
    state: FormState,
}

impl AdmissionsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Handles one press of "Find Admissions".
    ///
    /// Validates `input`, makes exactly one call to `source` and, on success, replaces the table
    /// with the returned rows.
    ///
    /// # Errors
    /// Returns a [`Notice`] for invalid input or a failed lookup; the form keeps its state.
    pub fn submit<S: AdmissionsSource>(&mut self, input: &str, source: &S) -> Result<(), Notice> {
        let patient_id = PatientId::parse(input).map_err(Notice::InvalidInput)?;

        let rows = source.fetch_admissions(patient_id).map_err(|e| {
            tracing::info!("lookup for patient {} failed: {}", patient_id, e);
            Notice::NoAdmissions(patient_id)
        })?;

        self.state = FormState::Populated { patient_id, rows };
        Ok(())
    }
}
