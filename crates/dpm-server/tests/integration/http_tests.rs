//! HTTP endpoint tests using Rocket's local client

use dpm_infrastructure::config::AppConfig;
use dpm_infrastructure::di::init_app;
use dpm_server::build_rocket;
use dpm_server::handlers::ServerState;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

const TICKER: &str = "se.iqesolutions.datamanager.product.impl.TickerSymbol";
const PRICE: &str = "se.iqesolutions.datamanager.product.impl.RealTimeSharePrice";
const SCORE: &str = "se.iqesolutions.datamanager.product.impl.StockScore";

async fn client() -> Client {
    let context = init_app(AppConfig::default()).await.expect("context");
    Client::tracked(build_rocket(ServerState::new(context.collection())))
        .await
        .expect("valid rocket instance")
}

async fn post_json(client: &Client, body: &Value) -> (Status, Value) {
    let response = client
        .post("/data/collect")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    let body = response.into_string().await.expect("response body");
    (status, serde_json::from_str(&body).expect("json body"))
}

#[rocket::async_test]
async fn test_health_endpoint() {
    let client = client().await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["providers"], 6);
}

#[rocket::async_test]
async fn test_collect_resolves_stock_score() {
    let client = client().await;
    let body = json!({
        "requestedDataProducts": { SCORE: { "maxCost": 1.0, "maxTime": 5.0 } },
        "alreadyAvailableDataProducts": [ { "@class": TICKER, "symbol": "NOK" } ]
    });

    let (status, json) = post_json(&client, &body).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["failedDataProducts"], json!({}));
    let collected = json["collectedDataProducts"].as_array().unwrap();
    assert_eq!(collected.len(), 6);
    assert_eq!(collected[0]["@class"], TICKER);
    assert_eq!(collected[5]["@class"], SCORE);
    assert_eq!(collected[5]["score"], 5.0);
}

#[rocket::async_test]
async fn test_collect_reports_per_type_failures() {
    let client = client().await;
    let body = json!({
        "requestedDataProducts": {
            PRICE: { "maxCost": 1.0, "maxTime": 5.0 },
            "se.iqesolutions.datamanager.product.impl.Missing": {},
            "se.iqesolutions.datamanager.DataManagerRequest": {}
        }
    });

    let (status, json) = post_json(&client, &body).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(json["collectedDataProducts"], json!([]));
    let failed = json["failedDataProducts"].as_object().unwrap();
    assert_eq!(failed.len(), 4);
    assert!(failed.contains_key(PRICE));
    assert!(failed.contains_key(TICKER));
}

#[rocket::async_test]
async fn test_collect_without_ceilings_filters_paid_providers() {
    let client = client().await;
    let body = json!({
        "requestedDataProducts": {
            PRICE: { "acceptableMethods": ["REAL_TIME_FEED"] }
        },
        "alreadyAvailableDataProducts": [ { "@class": TICKER, "symbol": "AAPL" } ]
    });

    let (status, json) = post_json(&client, &body).await;

    assert_eq!(status, Status::Ok);
    let collected = json["collectedDataProducts"].as_array().unwrap();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0]["@class"], TICKER);
    assert_eq!(
        json["failedDataProducts"][PRICE],
        "No provider available or dependencies not satisfied"
    );
}

#[rocket::async_test]
async fn test_collect_rejects_invalid_constraint() {
    let client = client().await;
    let body = json!({
        "requestedDataProducts": { PRICE: { "maxCost": -1.0 } }
    });

    let (status, json) = post_json(&client, &body).await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(json["code"], "INVALID_REQUEST");
    assert!(json["error"].as_str().unwrap().contains(PRICE));
}

#[rocket::async_test]
async fn test_malformed_json_uses_json_catcher() {
    let client = client().await;

    let response = client
        .post("/data/collect")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let json: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[rocket::async_test]
async fn test_wrong_shape_is_unprocessable() {
    let client = client().await;
    let body = json!({ "requestedDataProducts": ["not", "a", "map"] });

    let (status, json) = post_json(&client, &body).await;

    assert_eq!(status, Status::UnprocessableEntity);
    assert_eq!(json["code"], "UNPROCESSABLE_ENTITY");
}

#[rocket::async_test]
async fn test_unknown_route_is_json_404() {
    let client = client().await;

    let response = client.get("/nowhere").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let json: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");
}

#[rocket::async_test]
async fn test_product_types_endpoint() {
    let client = client().await;

    let response = client.get("/data/product-types").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let types: Vec<String> =
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(types.len(), 6);
    assert!(types.contains(&SCORE.to_string()));
    let mut sorted = types.clone();
    sorted.sort();
    assert_eq!(types, sorted);
}

#[rocket::async_test]
async fn test_providers_endpoint() {
    let client = client().await;

    let response = client.get("/data/providers").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let json: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    let providers = json.as_array().unwrap();
    assert_eq!(providers.len(), 6);

    let scoring = providers
        .iter()
        .find(|p| p["name"] == "stock-scoring")
        .unwrap();
    let product = &scoring["products"][0];
    assert_eq!(product["productType"], SCORE);
    assert_eq!(product["dependencies"].as_array().unwrap().len(), 4);
    assert!(product["expectedCost"].is_number());
    assert!(product["methods"].is_array());
}
