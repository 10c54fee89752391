use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cambio_core::{CambioError, RateProvider, RateTable};

/// Instruction for how `fetch_rates` should behave for a given base.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided table immediately.
    Return(RateTable),
    /// Fail immediately with the provided error.
    Fail(CambioError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    fallback: Option<MockBehavior>,
    requests: Vec<(String, Option<String>)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for calls with a specific base currency.
    pub async fn set_behavior(&self, base: &str, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(base.to_string(), behavior);
    }

    /// Set the behavior used when no per-base rule matches.
    pub async fn set_default_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback = Some(behavior);
    }

    /// Number of `fetch_rates` calls observed so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Return a copy of the `(base, symbols)` request log.
    pub async fn requests(&self) -> Vec<(String, Option<String>)> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.fallback = None;
        guard.requests.clear();
    }
}

/// A provider that defers all behavior to an external controller.
pub struct DynamicMockProvider {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn RateProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn RateProvider>, controller)
    }
}

#[async_trait]
impl RateProvider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch_rates(
        &self,
        base: &str,
        symbols: Option<&str>,
    ) -> Result<RateTable, CambioError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .requests
                .push((base.to_string(), symbols.map(str::to_string)));
            guard
                .rules
                .get(base)
                .cloned()
                .or_else(|| guard.fallback.clone())
        };

        match behavior {
            Some(MockBehavior::Return(table)) => Ok(table),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(CambioError::connector(
                self.name,
                format!("no behavior configured for {base}"),
            )),
        }
    }
}
