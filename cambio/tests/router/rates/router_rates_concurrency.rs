use std::sync::Arc;
use std::time::{Duration, Instant};

use cambio::{Cambio, RateProvider};
use cambio_middleware::ProviderBuilder;
use cambio_mock::{DynamicMockProvider, MockBehavior};

use crate::helpers::{StubProvider, close, table};

#[tokio::test]
async fn providers_are_called_concurrently() {
    let d = Duration::from_millis(150);
    let p1 = StubProvider::builder("P1")
        .returns(&[("EUR", 1.0)])
        .delay(d)
        .build();
    let p2 = StubProvider::builder("P2")
        .returns(&[("EUR", 2.0)])
        .delay(d)
        .build();
    let p3 = StubProvider::builder("P3")
        .returns(&[("EUR", 3.0)])
        .delay(d)
        .build();
    let cambio = Cambio::builder()
        .with_provider(p1)
        .with_provider(p2)
        .with_provider(p3)
        .build()
        .unwrap();

    let start = Instant::now();
    let t = cambio.get_rates("USD", None).await.unwrap();
    let elapsed = start.elapsed();
    assert!(close(t.rate("EUR").unwrap(), 2.0));
    assert!(
        elapsed < d * 3,
        "fan-out looks sequential: took {elapsed:?}"
    );
}

#[tokio::test]
async fn hung_provider_behind_a_timeout_is_a_failure() {
    let (raw, controller) = DynamicMockProvider::new_with_controller("hung");
    controller.set_default_behavior(MockBehavior::Hang).await;
    let hung = ProviderBuilder::new(raw)
        .with_timeout(Duration::from_millis(50))
        .build();

    let (fast, fast_ctl) = DynamicMockProvider::new_with_controller("fast");
    fast_ctl
        .set_default_behavior(MockBehavior::Return(table("fast", "USD", &[("EUR", 0.9)])))
        .await;

    let cambio = Cambio::builder()
        .with_provider(hung)
        .with_provider(fast)
        .build()
        .unwrap();

    let t = cambio.get_rates("USD", None).await.unwrap();
    assert_eq!(t.rate("EUR"), Some(0.9));
    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.provider("hung").unwrap().failed_requests, 1);
    assert_eq!(snap.provider("fast").unwrap().total_responses, 1);
    assert_eq!(controller.call_count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_lose_no_metric_updates() {
    let p1: Arc<dyn RateProvider> = StubProvider::builder("P1")
        .returns(&[("EUR", 0.9)])
        .build();
    let p2: Arc<dyn RateProvider> = StubProvider::builder("P2").fails().build();
    let cambio = Arc::new(
        Cambio::builder()
            .with_provider(p1)
            .with_provider(p2)
            .build()
            .unwrap(),
    );

    let mut handles = Vec::new();
    for i in 0..50 {
        let c = Arc::clone(&cambio);
        handles.push(tokio::spawn(async move {
            // Distinct bases guarantee a miss per call.
            let base = format!("B{i}");
            c.get_rates(&base, None).await.unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let snap = cambio.metrics_snapshot();
    assert_eq!(snap.total_queries, 50);
    let p1m = snap.provider("P1").unwrap();
    assert_eq!((p1m.total_requests, p1m.total_responses), (50, 50));
    let p2m = snap.provider("P2").unwrap();
    assert_eq!((p2m.total_requests, p2m.failed_requests), (50, 50));
}
