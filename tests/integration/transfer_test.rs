//! Integration tests for the transfer lifecycle.

mod helpers;

use axum::http::StatusCode;
use helpers::{TestApp, TestIdentity};

async fn create_transfer(
    app: &TestApp,
    donor: &TestIdentity,
    device_id: uuid::Uuid,
    school_id: uuid::Uuid,
) -> serde_json::Value {
    let response = app
        .request(
            "POST",
            "/api/transfers",
            Some(serde_json::json!({
                "device_id": device_id,
                "school_id": school_id,
            })),
            Some(donor),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.data().clone()
}

async fn device_status(app: &TestApp, device_id: uuid::Uuid) -> String {
    sqlx::query_scalar::<_, String>("SELECT status::text FROM devices WHERE id = $1")
        .bind(device_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("device status")
}

#[tokio::test]
async fn test_create_transfer_reserves_device() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let transfer = create_transfer(&app, &donor, device_id, school.user_id).await;

    assert_eq!(transfer["status"], "pending");
    assert_eq!(device_status(&app, device_id).await, "matched");
}

#[tokio::test]
async fn test_duplicate_transfer_is_conflict() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    create_transfer(&app, &donor, device_id, school.user_id).await;

    // The device is now matched, so the eligibility gate fires first.
    let response = app
        .request(
            "POST",
            "/api/transfers",
            Some(serde_json::json!({
                "device_id": device_id,
                "school_id": school.user_id,
            })),
            Some(&donor),
        )
        .await;
    assert!(
        response.status == StatusCode::CONFLICT || response.status == StatusCode::BAD_REQUEST,
        "got {}",
        response.status
    );
}

#[tokio::test]
async fn test_unverified_school_is_rejected() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", false, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let response = app
        .request(
            "POST",
            "/api/transfers",
            Some(serde_json::json!({
                "device_id": device_id,
                "school_id": school.user_id,
            })),
            Some(&donor),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_lifecycle_updates_device() {
    let app = TestApp::new().await;
    let admin = app.create_profile("admin", true, None).await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let transfer = create_transfer(&app, &donor, device_id, school.user_id).await;
    let transfer_id = transfer["id"].as_str().unwrap().to_string();
    let path = format!("/api/transfers/{}/status", transfer_id);

    // Admin approves, donor ships and delivers, school confirms.
    let steps: [(&TestIdentity, &str); 4] = [
        (&admin, "approved"),
        (&donor, "in_transit"),
        (&donor, "delivered"),
        (&school, "received"),
    ];
    for (actor, target) in steps {
        let response = app
            .request(
                "PUT",
                &path,
                Some(serde_json::json!({ "status": target })),
                Some(actor),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "to {target}: {:?}", response.body);
    }

    assert_eq!(device_status(&app, device_id).await, "completed");
}

#[tokio::test]
async fn test_donor_cannot_confirm_receipt() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let transfer = create_transfer(&app, &donor, device_id, school.user_id).await;
    let path = format!("/api/transfers/{}/status", transfer["id"].as_str().unwrap());

    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "received" })),
            Some(&donor),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_skipping_steps_is_rejected() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let transfer = create_transfer(&app, &donor, device_id, school.user_id).await;
    let path = format!("/api/transfers/{}/status", transfer["id"].as_str().unwrap());

    // Role allows the donor to set in_transit, but pending → in_transit
    // skips the approval step.
    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "in_transit" })),
            Some(&donor),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejection_returns_device_to_pool() {
    let app = TestApp::new().await;
    let admin = app.create_profile("admin", true, None).await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    let transfer = create_transfer(&app, &donor, device_id, school.user_id).await;
    let path = format!("/api/transfers/{}/status", transfer["id"].as_str().unwrap());

    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(device_status(&app, device_id).await, "approved");
}

#[tokio::test]
async fn test_list_is_scoped_to_participant() {
    let app = TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let other_donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
    let device_id = app
        .create_device(&donor, "Laptop", "used_good", "approved")
        .await;

    create_transfer(&app, &donor, device_id, school.user_id).await;

    let response = app
        .request("GET", "/api/transfers", None, Some(&other_donor))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["items"].as_array().unwrap().len(), 0);

    let response = app
        .request("GET", "/api/transfers", None, Some(&donor))
        .await;
    assert_eq!(response.data()["items"].as_array().unwrap().len(), 1);
}
