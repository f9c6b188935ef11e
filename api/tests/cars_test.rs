//! Integration tests for the fleet endpoints.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use common::{bearer_token, test_state};
use locadora_api::app::create_app;

#[actix_web::test]
async fn test_create_car_returns_payload() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "licensePlate": "ABC1234",
            "brand": "Fiat",
            "model": "Uno",
            "basePrice": 150.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["licensePlate"], "ABC1234");
    assert_eq!(body["brand"], "Fiat");
    assert_eq!(body["model"], "Uno");
    assert_eq!(body["basePrice"], 150.0);
}

#[actix_web::test]
async fn test_create_car_rejects_invalid_plate() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    for plate in ["1234ABC", "AB12345", "abc12x4", ""] {
        let req = test::TestRequest::post()
            .uri("/api/v1/cars")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "licensePlate": plate,
                "brand": "Fiat",
                "model": "Uno",
                "basePrice": 150.0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "plate: {:?}", plate);
    }
}

#[actix_web::test]
async fn test_create_car_rejects_non_positive_price() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "licensePlate": "ABC1234",
            "brand": "Fiat",
            "model": "Uno",
            "basePrice": -10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_unknown_car_is_404() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/cars/ZZZ9999")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_car_keeps_plate() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "licensePlate": "ABC1234",
            "brand": "Fiat",
            "model": "Uno",
            "basePrice": 150.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/api/v1/cars/ABC1234")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "brand": "Fiat",
            "model": "Argo",
            "basePrice": 180.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["licensePlate"], "ABC1234");
    assert_eq!(body["model"], "Argo");
    assert_eq!(body["basePrice"], 180.0);
}

#[actix_web::test]
async fn test_delete_car_then_404() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "licensePlate": "ABC1234",
            "brand": "Fiat",
            "model": "Uno",
            "basePrice": 150.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri("/api/v1/cars/ABC1234")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/v1/cars/ABC1234")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_cars() {
    let state = test_state();
    let token = bearer_token(&state);
    let app = test::init_service(create_app(state)).await;

    for (plate, model) in [("ABC1234", "Uno"), ("DEF5678", "Argo")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/cars")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "licensePlate": plate,
                "brand": "Fiat",
                "model": model,
                "basePrice": 150.0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/cars")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(|cars| cars.len()), Some(2));
}
