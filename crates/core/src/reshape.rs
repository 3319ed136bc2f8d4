//! Pure filtering, grouping and joining over fetched upstream collections.
//!
//! Nothing here performs I/O; the service fetches, these functions reshape. Output order always
//! follows input order.

use api_shared::{AdmissionSummary, CurrentAdmission};
use hospital_types::{Admission, Allocation, Employee};
use std::collections::{BTreeMap, HashSet};

/// Admissions owned by `patient_id`, compared as text against the upstream `patientID`.
pub fn admissions_for_patient(admissions: &[Admission], patient_id: &str) -> Vec<AdmissionSummary> {
    admissions
        .iter()
        .filter(|a| a.belongs_to(patient_id))
        .map(|a| AdmissionSummary {
            admission_id: a.id,
            admission_date: a.admission_date.clone(),
            discharge_date: a.discharge_date.clone(),
        })
        .collect()
}

/// Admissions that still carry the "not yet discharged" sentinel.
///
/// The admission `id` is what goes out under `patientID`.
pub fn current_admissions(admissions: &[Admission]) -> Vec<CurrentAdmission> {
    admissions
        .iter()
        .filter(|a| a.is_current())
        .map(|a| CurrentAdmission {
            patient_id: a.id,
            admission_date: a.admission_date.clone(),
        })
        .collect()
}

/// Number of allocations per employee id.
pub fn allocation_counts(allocations: &[Allocation]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for allocation in allocations {
        *counts.entry(allocation.employee_id).or_insert(0) += 1;
    }
    counts
}

/// The employee id with the most allocations.
///
/// Ties go to the lowest employee id. Returns `None` for an empty slice.
pub fn employee_with_most_allocations(allocations: &[Allocation]) -> Option<i64> {
    let mut best: Option<(i64, usize)> = None;
    // BTreeMap iterates in ascending id order, so only a strictly greater count replaces.
    for (id, count) in allocation_counts(allocations) {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id)
}

/// Employees that appear in no allocation, in employee list order.
pub fn employees_without_allocations<'a>(
    employees: &'a [Employee],
    allocations: &[Allocation],
) -> Vec<&'a Employee> {
    let allocated: HashSet<i64> = allocations.iter().map(|a| a.employee_id).collect();
    employees
        .iter()
        .filter(|e| !allocated.contains(&e.id))
        .collect()
}
