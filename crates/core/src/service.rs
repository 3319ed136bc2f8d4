//! Request-scoped orchestration: fetch what a route needs, then reshape it.

use crate::constants::EMPLOYEES_ENDPOINT;
use crate::reshape;
use crate::upstream::UpstreamClient;
use crate::{CoreConfig, CoreResult};
use api_shared::{AdmissionSummary, CurrentAdmission};
use hospital_types::Employee;

/// Aggregation operations backing the REST routes.
///
/// Holds no mutable state; each call performs its own upstream fetches.
#[derive(Clone, Debug)]
pub struct HospitalService {
    upstream: UpstreamClient,
}

impl HospitalService {
    pub fn new(cfg: &CoreConfig) -> Self {
        Self {
            upstream: UpstreamClient::new(cfg),
        }
    }

    /// Creates a service that talks to the upstream through `upstream`.
    pub fn with_upstream(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// All admissions whose `patientID` renders as exactly `patient_id`.
    ///
    /// # Returns
    /// The matching admissions in upstream order; empty when the patient has none.
    pub async fn admissions_for_patient(
        &self,
        patient_id: &str,
    ) -> CoreResult<Vec<AdmissionSummary>> {
        let admissions = self.upstream.admissions().await?;
        let found = reshape::admissions_for_patient(&admissions, patient_id);
        tracing::debug!(
            "patient {}: {} of {} admissions",
            patient_id,
            found.len(),
            admissions.len()
        );
        Ok(found)
    }

    /// Patients whose admission has not been discharged.
    pub async fn current_admissions(&self) -> CoreResult<Vec<CurrentAdmission>> {
        let admissions = self.upstream.admissions().await?;
        let current = reshape::current_admissions(&admissions);
        tracing::debug!("{} patients currently admitted", current.len());
        Ok(current)
    }

    /// The employee with the most allocations, looked up in full.
    ///
    /// # Returns
    /// * `Ok(Some(employee))` - the top employee's upstream record
    /// * `Ok(None)` - there are no allocations, or the employee lookup found nothing
    pub async fn employee_with_most_admissions(&self) -> CoreResult<Option<Employee>> {
        let allocations = self.upstream.allocations().await?;
        let Some(employee_id) = reshape::employee_with_most_allocations(&allocations) else {
            tracing::debug!("no allocations to rank");
            return Ok(None);
        };
        tracing::debug!("employee {} has the most allocations", employee_id);
        self.upstream.employee(employee_id).await
    }

    /// Employees with no allocations, each looked up in full, in employee list order.
    ///
    /// Every lookup must succeed: an empty body or a 404 for any employee fails the whole call.
    pub async fn employees_with_zero_admissions(&self) -> CoreResult<Vec<Employee>> {
        let allocations = self.upstream.allocations().await?;
        let employees = self.upstream.employees().await?;

        let idle = reshape::employees_without_allocations(&employees, &allocations);
        tracing::debug!(
            "{} of {} employees have no allocations",
            idle.len(),
            employees.len()
        );

        let mut details = Vec::with_capacity(idle.len());
        for employee in idle {
            let endpoint = format!("{EMPLOYEES_ENDPOINT}/{}", employee.id);
            details.push(self.upstream.fetch_json::<Employee>(&endpoint).await?);
        }
        Ok(details)
    }
}
