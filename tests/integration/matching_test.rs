//! Integration tests for match ranking endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_matches_for_need_ranks_exact_type_first() {
    let app = helpers::TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;

    app.create_device(&donor, "Laptop", "used_good", "approved")
        .await;
    app.create_device(&donor, "Printer", "used_good", "approved")
        .await;
    let need_id = app.create_need(&school, "Laptop", "urgent", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/needs/{}/matches", need_id),
            None,
            Some(&school),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let candidates = response.data().as_array().expect("candidates array");
    assert_eq!(candidates.len(), 2);

    let first = &candidates[0];
    assert_eq!(first["device"]["device_type"], "Laptop");
    // 60 type + 20 urgent priority, no coordinates registered.
    assert!(first["score"].as_u64().unwrap() >= 80);
}

#[tokio::test]
async fn test_condition_below_minimum_is_excluded() {
    let app = helpers::TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;

    app.create_device(&donor, "Laptop", "used_fair", "approved")
        .await;
    let need_id = app
        .create_need(&school, "Laptop", "high", Some("used_good"))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/needs/{}/matches", need_id),
            None,
            Some(&school),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_nearby_donor_outranks_distant_one() {
    let app = helpers::TestApp::new().await;
    // School in Paris; one donor in Paris, one in Madrid.
    let school = app
        .create_profile("school", true, Some((48.8566, 2.3522)))
        .await;
    let near_donor = app
        .create_profile("donor", true, Some((48.85, 2.35)))
        .await;
    let far_donor = app
        .create_profile("donor", true, Some((40.4168, -3.7038)))
        .await;

    let near_device = app
        .create_device(&near_donor, "Tablet", "used_good", "approved")
        .await;
    app.create_device(&far_donor, "Tablet", "used_good", "approved")
        .await;
    let need_id = app.create_need(&school, "Tablet", "medium", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/needs/{}/matches", need_id),
            None,
            Some(&school),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let candidates = response.data().as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(
        candidates[0]["device"]["id"].as_str().unwrap(),
        near_device.to_string()
    );
    assert!(candidates[0]["distance_km"].as_f64().unwrap() < 5.0);
}

#[tokio::test]
async fn test_matches_hidden_from_other_schools() {
    let app = helpers::TestApp::new().await;
    let school = app.create_profile("school", true, None).await;
    let other_school = app.create_profile("school", true, None).await;
    let need_id = app.create_need(&school, "Laptop", "low", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/needs/{}/matches", need_id),
            None,
            Some(&other_school),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_submission_classifies_unlabeled_device() {
    let app = helpers::TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;

    let response = app
        .request(
            "POST",
            "/api/devices",
            Some(serde_json::json!({
                "name": "Old work machine",
                "description": "ThinkPad with 8GB RAM in good condition",
                "condition": "used-good",
                "quantity": 1,
            })),
            Some(&donor),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["device_type"], "Laptop");
}

#[tokio::test]
async fn test_matches_for_device_uses_extracted_type() {
    let app = helpers::TestApp::new().await;
    let donor = app.create_profile("donor", true, None).await;
    let school = app.create_profile("school", true, None).await;

    // No stored device_type; the description should classify as Laptop.
    let device_id = {
        let id = uuid::Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO devices (id, donor_id, name, description, device_type, condition, quantity, images, status)
               VALUES ($1, $2, 'Donation', 'MacBook Pro 2019 with 16GB RAM in good condition', NULL, 'used_good'::device_condition, 1, '{}', 'approved'::device_status)"#,
        )
        .bind(id)
        .bind(donor.user_id)
        .execute(&app.db_pool)
        .await
        .expect("Failed to create device");
        id
    };
    app.create_need(&school, "Laptop", "medium", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/devices/{}/matches", device_id),
            None,
            Some(&donor),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let candidates = response.data().as_array().unwrap();
    assert_eq!(candidates.len(), 1);
    // Exact type match credit despite the missing label.
    assert!(candidates[0]["score"].as_u64().unwrap() >= 60);
}
