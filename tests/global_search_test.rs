//! End-to-end tests for the global search engine

mod common;

use common::{two_entity_backend, two_entity_registry, DelayedBackend, ARTICLE, PRODUCT};
use global_search::search::{
    GlobalResult, GlobalSearchService, SearchConfig, SearchConfigBuilder, SearchError,
    SearchOptions,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;

fn two_entity_service() -> GlobalSearchService {
    GlobalSearchService::new(
        Arc::new(two_entity_registry()),
        Arc::new(two_entity_backend()),
        SearchConfig::default(),
    )
}

#[tokio::test]
async fn test_two_entity_scenario() {
    let service = two_entity_service();
    let result = service.search("shoe").await.unwrap();

    // Both app groups present, content first (registry order)
    assert_eq!(result.apps.len(), 2);
    assert_eq!(result.apps[0].app_label, "content");
    assert_eq!(result.apps[1].app_label, "products");

    // Articles: 5 matches against cap 2
    let articles = result.model(ARTICLE).unwrap();
    assert_eq!(articles.items.len(), 2);
    assert!(articles.has_more);

    // Products: 1 match against cap 2
    let products = result.model(PRODUCT).unwrap();
    assert_eq!(products.items.len(), 1);
    assert!(!products.has_more);

    assert!(!result.is_timeout);
}

#[tokio::test]
async fn test_items_link_to_detail_views() {
    let service = two_entity_service();
    let result = service.search("shoe").await.unwrap();

    let products = result.model(PRODUCT).unwrap();
    assert_eq!(products.items[0].url, "/admin/products/product/1/change/");
    assert_eq!(products.items[0].display_text, "Trail Running Shoe");
    assert_eq!(
        products.changelist_url.as_deref(),
        Some("/admin/products/product/?q=shoe")
    );
}

#[tokio::test]
async fn test_slow_entity_omitted_fast_entities_intact() {
    let backend = DelayedBackend::new(two_entity_backend())
        .with_delay(ARTICLE, Duration::from_secs(30));
    let service = GlobalSearchService::new(
        Arc::new(two_entity_registry()),
        Arc::new(backend),
        SearchConfigBuilder::new().global_timeout_ms(50).build(),
    );

    let result = service.search("shoe").await.unwrap();

    assert!(result.is_timeout);
    assert!(result.model(ARTICLE).is_none());

    // The fast entity's results are present and correct
    let products = result.model(PRODUCT).unwrap();
    assert_eq!(products.items.len(), 1);
}

#[tokio::test]
async fn test_repeated_calls_are_deterministic() {
    let service = two_entity_service();

    let first = service.search("shoe").await.unwrap();
    for _ in 0..4 {
        let next = service.search("shoe").await.unwrap();
        assert_eq!(first.apps, next.apps);
    }
}

#[tokio::test]
async fn test_unmatched_entity_absent() {
    let service = two_entity_service();
    // Only articles mention "review"
    let result = service.search("review").await.unwrap();

    assert_eq!(result.apps.len(), 1);
    assert_eq!(result.apps[0].app_label, "content");
    assert!(result.model(PRODUCT).is_none());
}

#[tokio::test]
async fn test_query_validation_boundaries() {
    let service = two_entity_service();

    assert!(matches!(
        service.search("").await.unwrap_err(),
        SearchError::InvalidQuery(_)
    ));
    assert!(matches!(
        service.search(&"x".repeat(257)).await.unwrap_err(),
        SearchError::InvalidQuery(_)
    ));
    tokio_test::assert_ok!(service.search("x").await);
    tokio_test::assert_ok!(service.search(&"x".repeat(256)).await);
}

#[tokio::test]
async fn test_per_call_overrides() {
    let service = two_entity_service();
    let result = service
        .search_with(
            "shoe",
            SearchOptions {
                global_timeout_ms: Some(5000),
                per_model_cap: None,
            },
        )
        .await
        .unwrap();

    // Descriptor caps still win over the global default
    assert_eq!(result.model(ARTICLE).unwrap().items.len(), 2);
}

#[tokio::test]
async fn test_result_survives_wire_round_trip() {
    let service = two_entity_service();
    let result = service.search("shoe").await.unwrap();

    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: GlobalResult = serde_json::from_str(&encoded).unwrap();
    assert_eq!(result, decoded);
}
