use std::sync::Arc;

use cambio::{Cambio, CambioError, MetricsSink, ProviderMetrics};
use cambio_middleware::InMemoryMetrics;

use crate::helpers::StubProvider;

const fn pm(req: u64, resp: u64, fail: u64, hits: u64) -> ProviderMetrics {
    ProviderMetrics {
        total_requests: req,
        total_responses: resp,
        failed_requests: fail,
        cache_hits: hits,
    }
}

#[tokio::test]
async fn miss_then_hit_counters() {
    let ok = StubProvider::builder("ok").returns(&[("EUR", 0.9)]).build();
    let bad = StubProvider::builder("bad").fails().build();
    let cambio = Cambio::builder()
        .with_provider(ok)
        .with_provider(bad)
        .build()
        .unwrap();

    cambio.get_rates("USD", None).await.unwrap();
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.total_queries, 1);
    assert_eq!(snap.provider("ok").copied(), Some(pm(1, 1, 0, 0)));
    assert_eq!(snap.provider("bad").copied(), Some(pm(1, 0, 1, 0)));

    // A hit records request, response and cache hit for every provider, even one
    // that failed during the original fan-out.
    cambio.get_rates("USD", None).await.unwrap();
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.total_queries, 2);
    assert_eq!(snap.provider("ok").copied(), Some(pm(2, 2, 0, 1)));
    assert_eq!(snap.provider("bad").copied(), Some(pm(2, 1, 1, 1)));
}

#[tokio::test]
async fn queries_count_failed_aggregations_too() {
    let bad = StubProvider::builder("bad").fails().build();
    let cambio = Cambio::builder().with_provider(bad).build().unwrap();

    for _ in 0..3 {
        assert_eq!(
            cambio.get_rates("USD", None).await.unwrap_err(),
            CambioError::NoData
        );
    }
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.total_queries, 3);
    assert_eq!(snap.provider("bad").copied(), Some(pm(3, 0, 3, 0)));
}

#[tokio::test]
async fn blank_base_is_rejected_before_any_side_effect() {
    let p = StubProvider::builder("p").returns(&[("EUR", 0.9)]).build();
    let cambio = Cambio::builder()
        .with_provider(p.clone())
        .build()
        .unwrap();

    for base in ["", "   "] {
        let err = cambio.get_rates(base, None).await.unwrap_err();
        assert!(matches!(err, CambioError::InvalidArg(_)));
    }
    assert!(matches!(
        cambio.get_fresh_rates("", None).await.unwrap_err(),
        CambioError::InvalidArg(_)
    ));
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.total_queries, 0);
    assert!(snap.apis.is_empty());
    assert_eq!(p.calls(), 0);
}

#[tokio::test]
async fn custom_sink_is_driven_by_the_engine() {
    let sink = Arc::new(InMemoryMetrics::new());
    let p = StubProvider::builder("p").returns(&[("EUR", 0.9)]).build();
    let cambio = Cambio::builder()
        .with_provider(p)
        .metrics(sink.clone())
        .build()
        .unwrap();

    cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(sink.snapshot(), cambio.metrics_snapshot());
    assert_eq!(sink.snapshot().provider("p").copied(), Some(pm(1, 1, 0, 0)));
}

#[tokio::test]
async fn provider_results_reports_each_outcome_in_order() {
    let ok = StubProvider::builder("ok").returns(&[("EUR", 0.9)]).build();
    let bad = StubProvider::builder("bad").fails().build();
    let cambio = Cambio::builder()
        .with_provider(ok)
        .with_provider(bad)
        .build()
        .unwrap();

    let results = cambio.provider_results("USD", None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, "ok");
    assert!(results[0].1.is_available());
    assert_eq!(results[1].0, "bad");
    assert!(!results[1].1.is_available());
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.provider("bad").copied(), Some(pm(1, 0, 1, 0)));
}
