use axum::{
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use hospital_core::{CoreConfig, HospitalService, UpstreamClient};
use tower::ServiceExt;

const ADMISSIONS: &str = r#"[{"id":1,"admissionDate":"2020-11-28T16:45:00","dischargeDate":"2020-11-28T23:56:00","patientID":2},{"id":2,"admissionDate":"2020-12-07T22:14:00","dischargeDate":"0001-01-01T00:00:00","patientID":1},{"id":3,"admissionDate":"2021-09-23T21:50:00","dischargeDate":"2021-09-27T09:56:00","patientID":2},{"id":4,"admissionDate":"2024-02-23T21:50:00","dischargeDate":"2024-09-27T09:56:00","patientID":5},{"id":5,"admissionDate":"2024-04-12T22:55:00","dischargeDate":"2024-04-14T11:36:00","patientID":5},{"id":6,"admissionDate":"2024-04-19T21:50:00","dischargeDate":"0001-01-01T00:00:00","patientID":5}]"#;

const ALLOCATIONS: &str = r#"[{"id":1,"admissionID":1,"employeeID":4,"startTime":"2020-11-28T16:45:00","endTime":"2020-11-28T23:56:00"},{"id":2,"admissionID":3,"employeeID":4,"startTime":"2021-09-23T21:50:00","endTime":"2021-09-24T09:50:00"},{"id":3,"admissionID":2,"employeeID":6,"startTime":"2020-12-07T22:14:00","endTime":"2020-12-08T20:00:00"},{"id":4,"admissionID":2,"employeeID":3,"startTime":"2020-12-08T20:00:00","endTime":"2020-12-09T20:00:00"}]"#;

const EMPLOYEES: &str = r#"[{"id":1,"surname":"Finley","forename":"Sarah"},{"id":2,"surname":"Jackson","forename":"Robert"},{"id":3,"surname":"Allen","forename":"Alice"},{"id":4,"surname":"Jones","forename":"Sarah"},{"id":5,"surname":"Wicks","forename":"Patrick"},{"id":6,"surname":"Smith","forename":"Alice"}]"#;

fn employee_record(id: &str) -> Option<&'static str> {
    match id {
        "1" => Some(r#"{"id":1,"surname":"Finley","forename":"Sarah"}"#),
        "2" => Some(r#"{"id":2,"surname":"Jackson","forename":"Robert"}"#),
        "3" => Some(r#"{"id":3,"surname":"Allen","forename":"Alice"}"#),
        "4" => Some(r#"{"id":4,"surname":"Jones","forename":"Sarah"}"#),
        "5" => Some(r#"{"id":5,"surname":"Wicks","forename":"Patrick"}"#),
        "6" => Some(r#"{"id":6,"surname":"Smith","forename":"Alice"}"#),
        _ => None,
    }
}

/// Bodies served by the fixture upstream.
#[derive(Clone, Copy)]
struct Upstream {
    admissions: &'static str,
    allocations: &'static str,
    employees: &'static str,
    /// Served for every `/Employees/{id}` instead of the matching record.
    employee_lookup: Option<&'static str>,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            admissions: ADMISSIONS,
            allocations: ALLOCATIONS,
            employees: EMPLOYEES,
            employee_lookup: None,
        }
    }
}

/// Serves `upstream` on an ephemeral loopback port and returns a service pointed at it.
async fn service_against(upstream: Upstream) -> HospitalService {
    let fixture = Router::new()
        .route("/Admissions", get(move || async move { upstream.admissions }))
        .route("/Allocations", get(move || async move { upstream.allocations }))
        .route("/Employees", get(move || async move { upstream.employees }))
        .route(
            "/Employees/:id",
            get(move |Path(id): Path<String>| async move {
                match upstream.employee_lookup {
                    Some(body) => Ok(body),
                    None => employee_record(&id).ok_or(StatusCode::NOT_FOUND),
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture upstream");
    let addr = listener.local_addr().expect("fixture address");
    tokio::spawn(async move {
        axum::serve(listener, fixture).await.expect("fixture upstream");
    });

    let cfg = CoreConfig::new(&format!("http://{addr}/")).expect("fixture base url");
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build http client");
    HospitalService::with_upstream(UpstreamClient::with_http_client(&cfg, http))
}

async fn get_route(service: HospitalService, uri: &str) -> (StatusCode, String) {
    let response = crate::router(service)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn health_is_ok() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""ok":true"#));
}

#[tokio::test]
async fn admissions_for_patient_5() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/Admission/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"admissionId":4,"admissionDate":"2024-02-23T21:50:00","dischargeDate":"2024-09-27T09:56:00"},{"admissionId":5,"admissionDate":"2024-04-12T22:55:00","dischargeDate":"2024-04-14T11:36:00"},{"admissionId":6,"admissionDate":"2024-04-19T21:50:00","dischargeDate":"0001-01-01T00:00:00"}]"#
    );
}

#[tokio::test]
async fn admissions_for_minimum_patient() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/Admission/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"admissionId":2,"admissionDate":"2020-12-07T22:14:00","dischargeDate":"0001-01-01T00:00:00"}]"#
    );
}

#[tokio::test]
async fn admissions_for_unknown_patients_are_not_found() {
    // (path segment, identifier as echoed back)
    let cases = [
        ("3", "3"),
        ("0", "0"),
        ("-1", "-1"),
        ("A", "A"),
        ("%25", "%"),
        ("2.9999999", "2.9999999"),
        (
            "10000000000000000000000000000000000000000",
            "10000000000000000000000000000000000000000",
        ),
    ];

    for (segment, id) in cases {
        let service = service_against(Upstream::default()).await;
        let (status, body) = get_route(service, &format!("/Admission/{segment}")).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "patient {id:?}");
        assert_eq!(body, format!("No admissions for patient found with ID {id}"));
    }
}

#[tokio::test]
async fn current_admissions_lists_undischarged_patients() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/CurrentAdmissions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"patientID":2,"admissionDate":"2020-12-07T22:14:00"},{"patientID":6,"admissionDate":"2024-04-19T21:50:00"}]"#
    );
}

#[tokio::test]
async fn current_admissions_of_empty_list_is_not_found() {
    let service = service_against(Upstream {
        admissions: "[]",
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/CurrentAdmissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "No patients currently admitted");
}

#[tokio::test]
async fn employee_with_most_admissions_is_looked_up() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/EmployeeWithMostAdmissions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":4,"surname":"Jones","forename":"Sarah"}"#);
}

#[tokio::test]
async fn employee_with_most_admissions_without_allocations_is_not_found() {
    let service = service_against(Upstream {
        allocations: "[]",
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeeWithMostAdmissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn employee_with_most_admissions_unknown_employee_is_not_found() {
    let service = service_against(Upstream {
        allocations: r#"[{"id":1,"admissionID":1,"employeeID":42,"startTime":"2020-11-28T16:45:00","endTime":"2020-11-28T23:56:00"}]"#,
        ..Upstream::default()
    })
    .await;
    let (status, _) = get_route(service, "/EmployeeWithMostAdmissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employee_with_most_admissions_empty_lookup_is_not_found() {
    let service = service_against(Upstream {
        employee_lookup: Some(""),
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeeWithMostAdmissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn employees_with_zero_admissions_in_list_order() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/EmployeesWithZeroAdmissions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"id":1,"surname":"Finley","forename":"Sarah"},{"id":2,"surname":"Jackson","forename":"Robert"},{"id":5,"surname":"Wicks","forename":"Patrick"}]"#
    );
}

#[tokio::test]
async fn employees_with_zero_admissions_when_all_are_allocated() {
    let service = service_against(Upstream {
        employees: r#"[{"id":3,"surname":"Allen","forename":"Alice"},{"id":4,"surname":"Jones","forename":"Sarah"}]"#,
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeesWithZeroAdmissions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn empty_admissions_body_is_server_error() {
    let empty = Upstream {
        admissions: "",
        ..Upstream::default()
    };

    for uri in ["/Admission/5", "/CurrentAdmissions"] {
        let service = service_against(empty).await;
        let (status, body) = get_route(service, uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(body.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn empty_allocations_body_is_server_error() {
    let empty = Upstream {
        allocations: "",
        ..Upstream::default()
    };

    for uri in ["/EmployeeWithMostAdmissions", "/EmployeesWithZeroAdmissions"] {
        let service = service_against(empty).await;
        let (status, body) = get_route(service, uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert!(body.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn empty_employees_body_is_server_error() {
    let service = service_against(Upstream {
        employees: "",
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeesWithZeroAdmissions").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn empty_employee_lookup_fails_zero_admissions() {
    let service = service_against(Upstream {
        employee_lookup: Some(""),
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeesWithZeroAdmissions").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_employee_lookup_fails_zero_admissions() {
    let service = service_against(Upstream {
        employees: r#"[{"id":1,"surname":"Finley","forename":"Sarah"},{"id":42,"surname":"Nobody","forename":"Ann"}]"#,
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/EmployeesWithZeroAdmissions").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn malformed_upstream_json_is_server_error() {
    let service = service_against(Upstream {
        admissions: r#"{"not":"a list"}"#,
        ..Upstream::default()
    })
    .await;
    let (status, body) = get_route(service, "/CurrentAdmissions").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let service = service_against(Upstream::default()).await;
    let (status, body) = get_route(service, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).expect("openapi json");
    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/health",
        "/Admission/{patient_id}",
        "/CurrentAdmissions",
        "/EmployeeWithMostAdmissions",
        "/EmployeesWithZeroAdmissions",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
