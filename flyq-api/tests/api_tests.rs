//! Integration tests for flyq-api endpoints
//!
//! Tests cover:
//! - Flight listing, lookup and search (with city name projection)
//! - Statistics by airline, route and price range
//! - Airline and city catalogs
//! - Mock booking (success, validation and not-found paths)
//! - Health, build info, filter diagnostics and unmapped routes

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use flyq_api::store::RecordStore;
use flyq_api::{build_router, AppState};
use flyq_common::FlightRecord;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

const FLIGHTS_CSV: &str = "\
FlightNumber,Airline,Origin,Destination,DepartureTime,ArrivalTime,Duration,Price,Stops,Class,Status
6E101,IndiGo,BLR,BOM,06:00,07:30,1h 30m,\"₹3,500\",0,Economy,On Time
AI202,Air India,DEL,HYD,08:15,10:25,2h 10m,\"₹5,100\",0,Economy,On Time
6E305,IndiGo,HYD,BLR,07:30,09:00,1h 30m,\"₹2,800\",0,Economy,Delayed
UK404,Vistara,BOM,DEL,13:00,15:10,2h 10m,\"₹4,250\",1,Business,On Time
SG505,SpiceJet,BLR,DEL,18:45,21:30,2h 45m,\"₹6,900\",0,Economy,On Time
";

/// Test helper: app over the sample CSV
fn setup_app() -> axum::Router {
    let store = RecordStore::from_reader(FLIGHTS_CSV.as_bytes()).expect("Sample CSV should load");
    build_router(AppState::new(store))
}

/// Test helper: app over explicit records
fn setup_app_with(records: Vec<FlightRecord>) -> axum::Router {
    build_router(AppState::new(RecordStore::new(records)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

fn flight_numbers(body: &Value) -> Vec<String> {
    body["flights"]
        .as_array()
        .expect("flights should be an array")
        .iter()
        .map(|f| f["FlightNumber"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Listing and lookup
// =============================================================================

#[tokio::test]
async fn test_list_all_flights() {
    let (status, body) = send(setup_app(), get("/api/flights")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 5);
    assert_eq!(
        flight_numbers(&body),
        vec!["6E101", "AI202", "6E305", "UK404", "SG505"]
    );

    let first = &body["flights"][0];
    assert_eq!(first["origin_city"], "Bangalore");
    assert_eq!(first["destination_city"], "Mumbai");
    assert_eq!(first["Duration"], "1h 30m");
    assert_eq!(first["Class"], "Economy");
}

#[tokio::test]
async fn test_flight_details() {
    let (status, body) = send(setup_app(), get("/api/flights/UK404")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["flight"]["Airline"], "Vistara");
    assert_eq!(body["flight"]["origin_city"], "Mumbai");
    assert_eq!(body["flight"]["destination_city"], "Delhi");
}

#[tokio::test]
async fn test_flight_details_not_found() {
    let (status, body) = send(setup_app(), get("/api/flights/ZZ999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Flight not found"}));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_by_airline_end_to_end() {
    let app = setup_app_with(vec![FlightRecord::new(
        "6E101", "IndiGo", "BLR", "BOM", "₹3,500",
    )]);

    let (status, body) = send(app, get("/api/flights/search?airline=IndiGo")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    let flight = &body["flights"][0];
    assert_eq!(flight["FlightNumber"], "6E101");
    assert_eq!(flight["Price"], "₹3,500");
    assert_eq!(flight["origin_city"], "Bangalore");
    assert_eq!(flight["destination_city"], "Mumbai");
}

#[tokio::test]
async fn test_search_free_text_case_insensitive() {
    let (_, body) = send(setup_app(), get("/api/flights/search?q=indigo")).await;
    assert_eq!(flight_numbers(&body), vec!["6E101", "6E305"]);
}

#[tokio::test]
async fn test_search_free_text_matches_city_name() {
    let (_, body) = send(setup_app(), get("/api/flights/search?q=hyder")).await;
    assert_eq!(flight_numbers(&body), vec!["AI202", "6E305"]);
}

#[tokio::test]
async fn test_search_combined_filters() {
    let (_, body) = send(
        setup_app(),
        get("/api/flights/search?origin=BLR&destination=DEL"),
    )
    .await;
    assert_eq!(body["count"], 1);
    assert_eq!(flight_numbers(&body), vec!["SG505"]);
}

#[tokio::test]
async fn test_search_max_price_with_currency_format() {
    let (_, body) = send(
        setup_app(),
        get("/api/flights/search?max_price=%E2%82%B94%2C250"),
    )
    .await;
    assert_eq!(flight_numbers(&body), vec!["6E101", "6E305", "UK404"]);
}

#[tokio::test]
async fn test_search_invalid_max_price_is_ignored() {
    let (status, body) = send(setup_app(), get("/api/flights/search?max_price=cheap")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn test_search_empty_params_return_everything() {
    let (_, body) = send(
        setup_app(),
        get("/api/flights/search?q=&origin=&destination=&airline=&max_price="),
    )
    .await;
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn test_search_repeated_param_uses_first_value() {
    let (status, body) = send(
        setup_app(),
        get("/api/flights/search?origin=BLR&origin=DEL"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(flight_numbers(&body), vec!["6E101", "SG505"]);
}

#[tokio::test]
async fn test_flight_details_bad_path_encoding_is_json_400() {
    let (status, body) = send(setup_app(), get("/api/flights/%FF%FE")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_search_is_repeatable() {
    let app = setup_app();
    let uri = "/api/flights/search?q=i&max_price=5000";

    let (_, first) = send(app.clone(), get(uri)).await;
    let (_, second) = send(app.clone(), get(uri)).await;
    assert_eq!(first, second);

    // Listing afterwards still shows untouched records
    let (_, all) = send(app, get("/api/flights")).await;
    assert_eq!(all["count"], 5);
}

// =============================================================================
// Statistics and catalogs
// =============================================================================

#[tokio::test]
async fn test_stats() {
    let (status, body) = send(setup_app(), get("/api/flights/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let stats = &body["stats"];
    assert_eq!(stats["total_flights"], 5);
    assert_eq!(stats["airlines"]["IndiGo"], 2);
    assert_eq!(stats["airlines"]["Vistara"], 1);
    assert_eq!(stats["routes"]["Bangalore → Mumbai"], 1);
    assert_eq!(stats["routes"]["Hyderabad → Bangalore"], 1);
    assert_eq!(stats["price_ranges"]["Under ₹3,000"], 1);
    assert_eq!(stats["price_ranges"]["₹3,000 - ₹4,000"], 1);
    assert_eq!(stats["price_ranges"]["₹4,000 - ₹5,000"], 1);
    assert_eq!(stats["price_ranges"]["Above ₹5,000"], 2);
    assert_eq!(stats["unpriced_flights"], 0);
}

#[tokio::test]
async fn test_stats_survive_unparsable_price() {
    let app = setup_app_with(vec![
        FlightRecord::new("6E101", "IndiGo", "BLR", "BOM", "₹3,500"),
        FlightRecord::new("XX000", "Mystery Air", "DEL", "BOM", "call us"),
    ]);

    let (status, body) = send(app, get("/api/flights/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["total_flights"], 2);
    assert_eq!(body["stats"]["unpriced_flights"], 1);
    assert_eq!(body["stats"]["price_ranges"]["₹3,000 - ₹4,000"], 1);
}

#[tokio::test]
async fn test_airlines_unique() {
    let (status, body) = send(setup_app(), get("/api/airlines")).await;

    assert_eq!(status, StatusCode::OK);
    let mut airlines: Vec<_> = body["airlines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap().to_string())
        .collect();
    airlines.sort();
    assert_eq!(airlines, vec!["Air India", "IndiGo", "SpiceJet", "Vistara"]);
}

#[tokio::test]
async fn test_cities_sorted_by_code() {
    let (status, body) = send(setup_app(), get("/api/cities")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["cities"],
        json!([
            {"code": "BLR", "name": "Bangalore"},
            {"code": "BOM", "name": "Mumbai"},
            {"code": "DEL", "name": "Delhi"},
            {"code": "HYD", "name": "Hyderabad"},
        ])
    );
}

// =============================================================================
// Booking
// =============================================================================

#[tokio::test]
async fn test_book_known_flight() {
    let (status, body) = send(
        setup_app(),
        post_json("/api/book-flight", json!({"flight_number": "6E101"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["flight"]["FlightNumber"], "6E101");
    assert_eq!(body["message"], "Flight 6E101 booked successfully!");

    let booking_id = body["booking_id"].as_str().unwrap();
    assert_eq!(booking_id.len(), 16);
    assert!(booking_id.starts_with("BK"));
    assert!(booking_id[2..].chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_book_unknown_flight() {
    let (status, body) = send(
        setup_app(),
        post_json("/api/book-flight", json!({"flight_number": "ZZ999"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Flight not found"}));
}

#[tokio::test]
async fn test_book_without_flight_number() {
    let (status, body) = send(setup_app(), post_json("/api/book-flight", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": "Flight number is required"})
    );
}

#[tokio::test]
async fn test_book_with_unreadable_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/book-flight")
        .body(Body::from("not json"))
        .unwrap();

    let (status, body) = send(setup_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(setup_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "flyq-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_build_info() {
    let (status, body) = send(setup_app(), get("/api/buildinfo")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}

#[tokio::test]
async fn test_debug_filters() {
    let (status, body) = send(setup_app(), get("/api/debug/filters")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_flights"], 5);
    assert_eq!(body["test_results"]["origin=BLR"]["count"], 2);
    assert_eq!(
        body["test_results"]["q=indigo"]["flights"],
        json!(["6E101", "6E305"])
    );
}

#[tokio::test]
async fn test_unmapped_route_returns_json_404() {
    let (status, body) = send(setup_app(), get("/api/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
}
