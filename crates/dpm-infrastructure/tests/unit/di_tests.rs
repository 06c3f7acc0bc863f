//! Composition root tests

use dpm_domain::constants::{REAL_TIME_SHARE_PRICE, STOCK_SCORE};
use dpm_domain::error::Error;
use dpm_domain::value_objects::{DataRequest, Product, ProductConstraint, TickerSymbol};
use dpm_infrastructure::config::AppConfig;
use dpm_infrastructure::di::init_app;
use serde_json::json;
use std::collections::BTreeMap;

fn ticker(symbol: &str) -> Product {
    Product::TickerSymbol(TickerSymbol {
        symbol: symbol.into(),
    })
}

async fn names(config: AppConfig) -> Vec<String> {
    let context = init_app(config).await.unwrap();
    context
        .catalog()
        .providers()
        .iter()
        .map(|p| p.provider_name().to_string())
        .collect()
}

#[tokio::test]
async fn test_default_config_loads_every_provider_by_name() {
    let loaded = names(AppConfig::default()).await;
    assert_eq!(
        loaded,
        vec![
            "configuration",
            "country",
            "earnings",
            "finnish-exchange",
            "real-time-feed",
            "stock-scoring",
        ]
    );
}

#[tokio::test]
async fn test_enabled_list_fixes_selection_and_order() {
    let mut config = AppConfig::default();
    config.providers.enabled = vec!["real-time-feed".into(), "country".into()];

    assert_eq!(names(config).await, vec!["real-time-feed", "country"]);
}

#[tokio::test]
async fn test_unknown_enabled_provider_fails_startup() {
    let mut config = AppConfig::default();
    config.providers.enabled = vec!["bloomberg".into()];

    let error = init_app(config).await.unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
    assert!(error.to_string().contains("Unknown product provider 'bloomberg'"));
}

#[tokio::test]
async fn test_invalid_provider_setting_fails_startup() {
    let mut config = AppConfig::default();
    config.providers.settings.insert(
        "configuration".into(),
        BTreeMap::from([("stockScoreThreshold".to_string(), json!("high"))]),
    );

    let error = init_app(config).await.unwrap_err();
    assert!(error.to_string().contains("configuration"));
}

#[tokio::test]
async fn test_provider_settings_reach_the_collection_service() {
    let mut config = AppConfig::default();
    config.providers.settings.insert(
        "configuration".into(),
        BTreeMap::from([("stockScoreThreshold".to_string(), json!(7.5))]),
    );

    let context = init_app(config).await.unwrap();
    let request = DataRequest::new()
        .request(
            STOCK_SCORE,
            ProductConstraint::default()
                .with_max_cost(1.0)
                .with_max_time(5.0),
        )
        .with_available(ticker("NOK"));

    let response = context.collection().collect(request).await.unwrap();
    assert!(response.is_complete(), "{:?}", response.failed_data_products);
    // 100.0 / 3.5 capped at the configured threshold
    assert_eq!(response.find(Product::as_stock_score).unwrap().score, 7.5);
}

#[tokio::test]
async fn test_context_serves_discovery() {
    let context = init_app(AppConfig::default()).await.unwrap();

    assert!(
        context
            .collection()
            .product_types()
            .iter()
            .any(|t| t.as_str() == REAL_TIME_SHARE_PRICE)
    );
    assert_eq!(context.collection().providers().len(), 6);
    assert!(format!("{context:?}").contains("AppContext"));
}
