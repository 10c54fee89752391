use std::sync::Arc;

use cambio::{AGGREGATED_DATASOURCE, Cambio, CambioError, RateCache};

use crate::helpers::{RecordingCache, StubProvider, close};

#[tokio::test]
async fn overlapping_providers_are_averaged() {
    let p1 = StubProvider::builder("P1")
        .returns(&[("EUR", 1.1), ("GBP", 0.9)])
        .build();
    let p2 = StubProvider::builder("P2")
        .returns(&[("EUR", 1.3), ("GBP", 1.1)])
        .build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .build()
        .unwrap();

    let t = cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(t.datasource, AGGREGATED_DATASOURCE);
    assert_eq!(t.base, "USD");
    assert!(t.timestamp.is_some());
    let rates = t.rates.expect("rates");
    assert_eq!(rates.len(), 2);
    assert!(close(rates["EUR"], 1.2));
    assert!(close(rates["GBP"], 1.0));
}

#[tokio::test]
async fn failed_provider_is_excluded_from_the_merge() {
    let p1 = StubProvider::builder("P1").fails().build();
    let p2 = StubProvider::builder("P2")
        .returns(&[("EUR", 1.2), ("GBP", 1.0)])
        .build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .build()
        .unwrap();

    let t = cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(t.rate("EUR"), Some(1.2));
    assert_eq!(t.rate("GBP"), Some(1.0));

    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.provider("P1").unwrap().failed_requests, 1);
    assert_eq!(snap.provider("P1").unwrap().total_responses, 0);
    assert_eq!(snap.provider("P2").unwrap().total_responses, 1);
    assert_eq!(snap.provider("P2").unwrap().failed_requests, 0);
}

#[tokio::test]
async fn keys_are_the_union_and_missing_keys_are_not_zero() {
    let p1 = StubProvider::builder("P1")
        .returns(&[("EUR", 1.0), ("JPY", 150.0)])
        .build();
    let p2 = StubProvider::builder("P2")
        .returns(&[("EUR", 3.0), ("CHF", 0.9)])
        .build();
    let p3 = StubProvider::builder("P3").returns(&[("EUR", 2.0)]).build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .with_provider(p3)
        .build()
        .unwrap();

    let rates = cambio.get_fresh_rates("USD", None).await.unwrap().rates.unwrap();
    let keys: Vec<_> = rates.keys().cloned().collect();
    assert_eq!(keys, vec!["CHF", "EUR", "JPY"]);
    assert!(close(rates["EUR"], 2.0));
    assert!(close(rates["JPY"], 150.0));
    assert!(close(rates["CHF"], 0.9));
}

#[tokio::test]
async fn table_without_rates_counts_as_response_but_adds_nothing() {
    let p1 = StubProvider::builder("P1").returns_no_rates().build();
    let p2 = StubProvider::builder("P2").returns(&[("EUR", 0.5)]).build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .build()
        .unwrap();

    let t = cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(t.rates.as_ref().map(|r| r.len()), Some(1));
    assert_eq!(t.rate("EUR"), Some(0.5));
    let p1m = *cambio.metrics_snapshot().provider("P1").unwrap();
    assert_eq!(p1m.total_responses, 1);
    assert_eq!(p1m.failed_requests, 0);
}

#[tokio::test]
async fn only_rateless_tables_yield_an_empty_mapping() {
    let p1 = StubProvider::builder("P1").returns_no_rates().build();
    let cambio = Cambio::builder().with_provider(p1).build().unwrap();
    let t = cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(t.rates.map(|r| r.is_empty()), Some(true));
}

#[tokio::test]
async fn all_providers_failing_is_no_data_and_nothing_is_cached() {
    let cache = Arc::new(RecordingCache::new());
    let p1 = StubProvider::builder("P1").fails().build();
    let p2 = StubProvider::builder("P2").fails().build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .cache(cache.clone())
        .build()
        .unwrap();

    let err = cambio.get_rates("USD", Some("EUR")).await.unwrap_err();
    assert_eq!(err, CambioError::NoData);
    assert_eq!(
        err.to_string(),
        "No exchange rate data available from any provider"
    );
    assert_eq!(cache.set_count(), 0);
    assert_eq!(cache.get("exchangeRates::USD::EUR").await.unwrap(), None);
}

#[tokio::test]
async fn symbols_are_forwarded_unfiltered_by_the_engine() {
    // The engine never filters after merging.
    let p1 = StubProvider::builder("P1")
        .returns(&[("EUR", 0.9), ("GBP", 0.8)])
        .build();
    let cambio = Cambio::builder()
        .with_provider(p1.clone())
        .build()
        .unwrap();

    let t = cambio.get_rates("USD", Some("EUR")).await.unwrap();
    assert_eq!(t.rates.unwrap().len(), 2);
    assert_eq!(
        p1.seen().await,
        vec![("USD".to_string(), Some("EUR".to_string()))]
    );
}
