//! HTTP tests for the reporting API, run against the in-memory store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use reporting_service::store::InMemoryReservationStore;
use reporting_service::{create_router, AppState, ReportingService};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

fn create_test_app() -> Router {
    let service = ReportingService::new(Arc::new(InMemoryReservationStore::new()));
    create_router(AppState { service })
}

fn reservation(
    reservation_id: Uuid,
    apartment: &str,
    price: f64,
    guests: i32,
    length: i64,
) -> Value {
    json!({
        "reservationId": reservation_id,
        "checkInDate": "2025-04-01",
        "checkOutDate": "2025-04-05",
        "guests": guests,
        "reservationLength": length,
        "totalPrice": price,
        "user": "Ivancho",
        "apartment": apartment
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_reservation(app: &Router, payload: &Value) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder()
            .uri("/api/v1/admin/reporting/reservations")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_save_reservation_returns_created() {
    let app = create_test_app();
    let reservation_id = Uuid::new_v4();

    let (status, body) =
        post_reservation(&app, &reservation(reservation_id, "Apartment 1", 500.00, 3, 2)).await;

    assert_eq!(status, StatusCode::CREATED);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["reservationId"], reservation_id.to_string());
    assert_eq!(json["user"], "Ivancho");
    assert_eq!(json["apartment"], "Apartment 1");
    assert_eq!(json["guests"], 3);
    assert_eq!(json["reservationLength"], 2);
    assert_eq!(json["totalPrice"].as_f64(), Some(500.0));
    assert_eq!(json["checkInDate"], "2025-04-01");
    assert_eq!(json["checkOutDate"], "2025-04-05");
}

#[tokio::test]
async fn test_save_reservation_with_invalid_input() {
    let app = create_test_app();

    let invalid = json!({
        "user": "",
        "apartment": "",
        "checkInDate": "invalid-date",
        "checkOutDate": "invalid-date",
        "guests": -1,
        "totalPrice": -100
    });
    let (status, body) = post_reservation(&app, &invalid).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid reservation payload");

    let mut negative_guests = reservation(Uuid::new_v4(), "Apartment 1", 100.0, 2, 2);
    negative_guests["guests"] = json!(-1);
    let (status, _) = post_reservation(&app, &negative_guests).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/api/v1/admin/reporting").await;
    assert_eq!(status, StatusCode::OK);
    let history: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_reservation_history_lists_all_records() {
    let app = create_test_app();
    post_reservation(&app, &reservation(Uuid::new_v4(), "Apartment 1", 150.0, 3, 2)).await;
    post_reservation(&app, &reservation(Uuid::new_v4(), "Apartment 2", 200.0, 4, 3)).await;

    let (status, body) = get(&app, "/api/v1/admin/reporting").await;

    assert_eq!(status, StatusCode::OK);
    let history: Value = serde_json::from_slice(&body).unwrap();
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["apartment"], "Apartment 1");
    assert_eq!(history[1]["guests"], 4);
    assert_eq!(history[1]["reservationLength"], 3);
}

#[tokio::test]
async fn test_stats_per_apartment() {
    let app = create_test_app();
    for payload in [
        reservation(Uuid::new_v4(), "Apartment 1", 150.0, 3, 2),
        reservation(Uuid::new_v4(), "Apartment 1", 200.0, 2, 2),
        reservation(Uuid::new_v4(), "Apartment 2", 100.0, 4, 2),
    ] {
        let (status, _) = post_reservation(&app, &payload).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/v1/admin/reporting/stats").await;

    assert_eq!(status, StatusCode::OK);
    let stats: Value = serde_json::from_slice(&body).unwrap();
    let stats = stats.as_array().unwrap();
    assert_eq!(stats.len(), 2);

    let first = stats.iter().find(|s| s["apartment"] == "Apartment 1").unwrap();
    assert_eq!(first["totalRevenue"].as_f64(), Some(350.0));
    assert_eq!(first["totalBookedDays"], "4");
    assert_eq!(first["totalGuestsVisited"], "5");

    let second = stats.iter().find(|s| s["apartment"] == "Apartment 2").unwrap();
    assert_eq!(second["totalRevenue"].as_f64(), Some(100.0));
    assert_eq!(second["totalBookedDays"], "2");
    assert_eq!(second["totalGuestsVisited"], "4");
}

#[tokio::test]
async fn test_stats_of_empty_history() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/v1/admin/reporting/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn test_reservation_details_with_valid_id() {
    let app = create_test_app();
    let reservation_id = Uuid::new_v4();
    post_reservation(&app, &reservation(reservation_id, "apartment 2", 1.0, 3, 2)).await;

    let (status, body) = get(
        &app,
        &format!("/api/v1/admin/reporting/query?reservationId={}", reservation_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["reservationId"], reservation_id.to_string());
    assert_eq!(json["guests"], 3);
    assert_eq!(json["reservationLength"], 2);
    assert_eq!(json["totalPrice"].as_f64(), Some(1.0));
    assert_eq!(json["user"], "Ivancho");
    assert_eq!(json["apartment"], "apartment 2");
}

#[tokio::test]
async fn test_reservation_details_not_found() {
    let app = create_test_app();
    let missing = Uuid::new_v4();

    let (status, body) = get(
        &app,
        &format!("/api/v1/admin/reporting/query?reservationId={}", missing),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        format!("Reservation not found with ID: {}", missing)
    );
}

#[tokio::test]
async fn test_reservation_details_with_malformed_id() {
    let app = create_test_app();

    let (status, body) =
        get(&app, "/api/v1/admin/reporting/query?reservationId=not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid reservation ID format");

    let (status, _) = get(&app, "/api/v1/admin/reporting/query").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reservation_details_with_padded_id() {
    let app = create_test_app();
    let reservation_id = Uuid::new_v4();
    post_reservation(&app, &reservation(reservation_id, "Apartment 1", 10.0, 1, 1)).await;

    let (status, body) = get(
        &app,
        &format!("/api/v1/admin/reporting/query?reservationId=%20{}", reservation_id),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid reservation ID format");
}

#[tokio::test]
async fn test_extreme_and_precise_amounts_render_exactly() {
    let app = create_test_app();

    let mut huge = reservation(Uuid::new_v4(), "Palace", 0.0, 2, 1);
    huge["totalPrice"] = json!("1e400");
    let (status, _) = post_reservation(&app, &huge).await;
    assert_eq!(status, StatusCode::CREATED);

    let precise = r#"{
        "reservationId": "0b6a4a4e-2f0e-4c36-9d7a-6c1f0f9f1a01",
        "checkInDate": "2025-04-01",
        "checkOutDate": "2025-04-05",
        "guests": 2,
        "reservationLength": 4,
        "totalPrice": 12345678901234567.89,
        "user": "Ivancho",
        "apartment": "Penthouse"
    }"#;
    let (status, _) = send(
        &app,
        Request::builder()
            .uri("/api/v1/admin/reporting/reservations")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(precise))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = get(&app, "/api/v1/admin/reporting").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/v1/admin/reporting/stats").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(
        text.contains(r#""totalRevenue":12345678901234567.89"#),
        "unexpected stats body: {}",
        text
    );
}

#[tokio::test]
async fn test_stats_with_overflowing_stay_lengths() {
    let app = create_test_app();
    let long_stay = i64::MAX / 2 + 1;
    for _ in 0..2 {
        let (status, _) =
            post_reservation(&app, &reservation(Uuid::new_v4(), "Forever", 1.0, 1, long_stay))
                .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/v1/admin/reporting/stats").await;

    assert_eq!(status, StatusCode::OK);
    let stats: Value = serde_json::from_slice(&body).unwrap();
    let expected = (2 * i128::from(long_stay)).to_string();
    assert_eq!(stats[0]["totalBookedDays"], expected.as_str());
}
