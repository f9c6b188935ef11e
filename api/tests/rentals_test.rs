//! Integration tests for the rental endpoints.
//!
//! These exercise the booking conflict rules end to end: inclusive
//! date boundaries, status transitions freeing the car, and historical
//! rentals that never block.

mod common;

use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test,
};
use serde_json::json;

use common::{bearer_token, test_state};
use locadora_api::app::create_app;

async fn seed_car_and_customer<S, B>(app: &S, token: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "licensePlate": "ABC1234",
            "brand": "Fiat",
            "model": "Uno",
            "basePrice": 200.0
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/customers")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "name": "Aislan",
            "cpf": "51430203609"
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

fn rental_payload(start: &str, end: &str) -> serde_json::Value {
    json!({
        "licensePlate": "ABC1234",
        "cpf": "51430203609",
        "startDate": start,
        "endDate": end
    })
}

#[actix_web::test]
async fn test_create_rental_prices_inclusive_days() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-11"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["licensePlate"], "ABC1234");
    assert_eq!(body["cpf"], "514.302.036-09");
    // Two inclusive days at 200.0 per day
    assert_eq!(body["totalPrice"], 400.0);
    assert_eq!(body["status"], "ACTIVE");
    assert!(body.get("id").is_some());
}

#[actix_web::test]
async fn test_same_day_rental_costs_one_day() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-10"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["totalPrice"], 200.0);
}

#[actix_web::test]
async fn test_overlapping_rental_is_409() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-15", "2026-01-25"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_shared_boundary_day_conflicts() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Starting on the checkout day still conflicts
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-20", "2026-01-22"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The day after the checkout is free
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-21", "2026-01-23"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_historical_rental_never_blocks() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let mut payload = rental_payload("2026-01-10", "2026-01-20");
    payload["active"] = json!(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FINISHED");

    // The same period is still bookable
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_finishing_rental_frees_the_car() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().expect("id should be a string").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/rentals/{}/finish", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FINISHED");

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-12", "2026-01-14"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_cancel_twice_is_409() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().expect("id should be a string").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/rentals/{}/cancel", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/rentals/{}/cancel", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_rental_for_unknown_car_is_404() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let mut payload = rental_payload("2026-01-10", "2026-01-20");
    payload["licensePlate"] = json!("ZZZ9999");
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_rental_for_unknown_customer_is_404() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let mut payload = rental_payload("2026-01-10", "2026-01-20");
    payload["cpf"] = json!("12345678909");
    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_inverted_period_is_400() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-20", "2026-01-10"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_rental_is_204() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;
    seed_car_and_customer(&app, &token).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(rental_payload("2026-01-10", "2026-01-20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["id"].as_str().expect("id should be a string").to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/rentals/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/rentals/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
