//! Blocking access to the aggregator's admissions route.

use api_shared::AdmissionSummary;
use hospital_types::PatientId;
use reqwest::Url;

use crate::form::AdmissionRow;

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
    #[error("request to backend failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
    #[error("backend returned malformed JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Anything that can produce the admissions of one patient.
pub trait AdmissionsSource {
    fn fetch_admissions(&self, patient_id: PatientId) -> Result<Vec<AdmissionRow>, FetchError>;
}

/// Blocking HTTP client for `GET {backend}/Admission/{patientID}`.
pub struct BackendClient {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let trimmed = base_url.trim();
        let with_slash = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let base_url = Url::parse(&with_slash)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        })
    }

    pub fn admissions_url(&self, patient_id: PatientId) -> Result<Url, FetchError> {
        self.base_url
            .join(&format!("Admission/{patient_id}"))
            .map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))
    }
}

impl AdmissionsSource for BackendClient {
    fn fetch_admissions(&self, patient_id: PatientId) -> Result<Vec<AdmissionRow>, FetchError> {
        let url = self.admissions_url(patient_id)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send()?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::info!("backend returned {} for patient {}", status, patient_id);
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        Ok(parse_admissions(&body)?)
    }
}

/// Reads the admissions array returned by the backend.
///
/// Entries missing any of `admissionId`, `admissionDate` or `dischargeDate` are skipped.
///
/// # Errors
/// Returns an error if `body` is not a JSON array.
pub fn parse_admissions(body: &str) -> Result<Vec<AdmissionRow>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body)?;

    let mut rows = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<AdmissionSummary>(entry) {
            Ok(summary) => rows.push(AdmissionRow::from(summary)),
            Err(e) => tracing::warn!("skipping admission {}: {}", index, e),
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: &str) -> PatientId {
        PatientId::parse(n).expect("valid patient id")
    }

    #[test]
    fn admissions_url_defaults_to_localhost() {
        let client = BackendClient::new(DEFAULT_BACKEND_URL).expect("valid url");
        assert_eq!(
            client.admissions_url(id("5")).expect("url").as_str(),
            "http://localhost:8080/Admission/5"
        );
    }

    #[test]
    fn admissions_url_keeps_base_path() {
        let client = BackendClient::new("http://ward-pc:9000/hospital/").expect("valid url");
        assert_eq!(
            client.admissions_url(id("12")).expect("url").as_str(),
            "http://ward-pc:9000/hospital/Admission/12"
        );
    }

    #[test]
    fn rejects_unparseable_backend_url() {
        assert!(matches!(
            BackendClient::new("not a url"),
            Err(FetchError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn parses_backend_rows_in_order() {
        let body = r#"[{"admissionId":4,"admissionDate":"2024-02-23T21:50:00","dischargeDate":"2024-09-27T09:56:00"},{"admissionId":6,"admissionDate":"2024-04-19T21:50:00","dischargeDate":"0001-01-01T00:00:00"}]"#;
        let rows = parse_admissions(body).expect("parse rows");

        assert_eq!(
            rows,
            vec![
                AdmissionRow {
                    admission_id: "4".into(),
                    admission_date: "2024-02-23T21:50:00".into(),
                    discharge_date: "2024-09-27T09:56:00".into(),
                },
                AdmissionRow {
                    admission_id: "6".into(),
                    admission_date: "2024-04-19T21:50:00".into(),
                    discharge_date: "0001-01-01T00:00:00".into(),
                },
            ]
        );
    }

    #[test]
    fn skips_incomplete_entries() {
        let body = r#"[{"admissionId":4,"admissionDate":"2024-02-23T21:50:00"},{"admissionId":5,"admissionDate":"2024-04-12T22:55:00","dischargeDate":"2024-04-14T11:36:00"}]"#;
        let rows = parse_admissions(body).expect("parse rows");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].admission_id, "5");
    }

    #[test]
    fn non_array_body_is_an_error() {
        assert!(parse_admissions("No admissions for patient found with ID 3").is_err());
        assert!(parse_admissions(r#"{"admissionId":4}"#).is_err());
    }
}
