//! Integration tests for voucher issuance, verification, and redemption.

mod helpers;

use axum::http::StatusCode;
use helpers::{TestApp, TestIdentity};

async fn setup_transfer(app: &TestApp) -> (TestIdentity, TestIdentity, uuid::Uuid) {
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;
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
    assert_eq!(response.status, StatusCode::OK);
    let transfer_id = response.data()["id"]
        .as_str()
        .unwrap()
        .parse()
        .expect("transfer id");

    (donor, school, transfer_id)
}

async fn issue(app: &TestApp, actor: &TestIdentity, transfer_id: uuid::Uuid) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/vouchers",
        Some(serde_json::json!({ "transfer_id": transfer_id })),
        Some(actor),
    )
    .await
}

#[tokio::test]
async fn test_issue_and_verify() {
    let app = TestApp::new().await;
    let (donor, _school, transfer_id) = setup_transfer(&app).await;

    let response = issue(&app, &donor, transfer_id).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let token = response.data()["token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 64);
    assert_eq!(response.data()["status"], "active");

    let response = app
        .request(
            "GET",
            &format!("/api/vouchers/verify/{}", token),
            None,
            Some(&donor),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_valid"], true);
}

#[tokio::test]
async fn test_second_issue_is_conflict() {
    let app = TestApp::new().await;
    let (donor, _school, transfer_id) = setup_transfer(&app).await;

    assert_eq!(issue(&app, &donor, transfer_id).await.status, StatusCode::OK);
    assert_eq!(
        issue(&app, &donor, transfer_id).await.status,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_only_donor_or_admin_issues() {
    let app = TestApp::new().await;
    let (_donor, school, transfer_id) = setup_transfer(&app).await;

    let response = issue(&app, &school, transfer_id).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_redeem_exactly_once() {
    let app = TestApp::new().await;
    let (donor, school, transfer_id) = setup_transfer(&app).await;

    let voucher = issue(&app, &donor, transfer_id).await;
    let voucher_id = voucher.data()["id"].as_str().unwrap().to_string();
    let path = format!("/api/vouchers/{}/redeem", voucher_id);

    let response = app.request("POST", &path, None, Some(&school)).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["status"], "used");

    // Second redemption observes AlreadyUsed.
    let response = app.request("POST", &path, None, Some(&school)).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_redemptions_have_one_winner() {
    let app = TestApp::new().await;
    let (donor, school, transfer_id) = setup_transfer(&app).await;

    let voucher = issue(&app, &donor, transfer_id).await;
    let path = format!(
        "/api/vouchers/{}/redeem",
        voucher.data()["id"].as_str().unwrap()
    );

    let (a, b, c, d, e) = tokio::join!(
        app.request("POST", &path, None, Some(&school)),
        app.request("POST", &path, None, Some(&school)),
        app.request("POST", &path, None, Some(&school)),
        app.request("POST", &path, None, Some(&school)),
        app.request("POST", &path, None, Some(&school)),
    );

    let statuses = [a.status, b.status, c.status, d.status, e.status];
    let winners = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!(winners, 1, "{statuses:?}");
    assert_eq!(conflicts, statuses.len() - 1, "{statuses:?}");
}

#[tokio::test]
async fn test_donor_cannot_redeem() {
    let app = TestApp::new().await;
    let (donor, _school, transfer_id) = setup_transfer(&app).await;

    let voucher = issue(&app, &donor, transfer_id).await;
    let path = format!(
        "/api/vouchers/{}/redeem",
        voucher.data()["id"].as_str().unwrap()
    );

    let response = app.request("POST", &path, None, Some(&donor)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_voucher_is_invalid_and_gone() {
    let app = TestApp::new().await;
    let (donor, school, transfer_id) = setup_transfer(&app).await;

    let voucher = issue(&app, &donor, transfer_id).await;
    let voucher_id = voucher.data()["id"].as_str().unwrap().to_string();
    let token = voucher.data()["token"].as_str().unwrap().to_string();

    // Force the expiry into the past while the stored status stays active.
    sqlx::query("UPDATE vouchers SET expires_at = NOW() - INTERVAL '1 hour' WHERE id = $1::uuid")
        .bind(&voucher_id)
        .execute(&app.db_pool)
        .await
        .expect("expire voucher");

    let response = app
        .request(
            "GET",
            &format!("/api/vouchers/verify/{}", token),
            None,
            Some(&school),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_valid"], false);
    assert_eq!(response.data()["voucher"]["status"], "active");

    let response = app
        .request(
            "POST",
            &format!("/api/vouchers/{}/redeem", voucher_id),
            None,
            Some(&school),
        )
        .await;
    assert_eq!(response.status, StatusCode::GONE);
}
