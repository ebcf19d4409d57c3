use crate::metric::ModelMetric;
use crate::registry::{MAX_INITIAL_CAPACITY, MetricsTotals, RegistryOptions};
use crate::types::MetricsSnapshot;
use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct RegistryInner {
    index: FastHashMap<Box<str>, usize>,
    slots: Vec<ModelMetric>,
}

impl RegistryInner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FastHashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn get(&self, model_name: &str) -> Option<&ModelMetric> {
        self.index.get(model_name).map(|&slot| &self.slots[slot])
    }
}

/// Per-model request counters keyed by model name.
///
/// All operations take `&self`; state sits behind one `RwLock` so a registry
/// can be shared through an `Arc` or a `&'static` reference. Model names keep
/// the order in which they were first recorded.
#[derive(Debug)]
pub struct MetricsRegistry {
    inner: RwLock<RegistryInner>,
    options: RegistryOptions,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Options that skipped `validate()` (e.g. deserialized ones) still work;
    /// preallocation is capped at [`MAX_INITIAL_CAPACITY`].
    pub fn with_options(options: RegistryOptions) -> Self {
        let capacity = options.initial_capacity.min(MAX_INITIAL_CAPACITY);
        Self {
            inner: RwLock::new(RegistryInner::with_capacity(capacity)),
            options,
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Count one request for `model_name` and return the metric as it stands
    /// after the increment. The metric is created on first use.
    pub fn record(&self, model_name: &str, success: bool) -> ModelMetric {
        let mut inner = self.inner.write();

        let slot = match inner.index.get(model_name).copied() {
            Some(slot) => slot,
            None => {
                let slot = inner.slots.len();
                inner.slots.push(ModelMetric::new(model_name));
                inner.index.insert(model_name.into(), slot);
                tracing::event!(tracing::Level::DEBUG, operation="record", model=%model_name, created=true);
                slot
            }
        };

        let metric = &mut inner.slots[slot];
        metric.record_request(success);

        if self.options.debug {
            tracing::event!(tracing::Level::DEBUG, operation="record", model=%model_name, success, request_count=metric.request_count());
        } else {
            tracing::event!(tracing::Level::TRACE, operation="record", model=%model_name, success, request_count=metric.request_count());
        }

        metric.clone()
    }

    #[inline]
    pub fn record_success(&self, model_name: &str) -> ModelMetric {
        self.record(model_name, true)
    }

    #[inline]
    pub fn record_error(&self, model_name: &str) -> ModelMetric {
        self.record(model_name, false)
    }

    pub fn get(&self, model_name: &str) -> Option<ModelMetric> {
        self.inner.read().get(model_name).cloned()
    }

    pub fn contains(&self, model_name: &str) -> bool {
        self.inner.read().index.contains_key(model_name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().slots.is_empty()
    }

    pub fn list_model_names(&self) -> Vec<String> {
        self.inner
            .read()
            .slots
            .iter()
            .map(|metric| metric.model_name().to_string())
            .collect()
    }

    /// Detached copy of every tracked metric. Changes to the returned map
    /// never reach the registry.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.inner.read();
        tracing::event!(tracing::Level::TRACE, operation="snapshot", models=inner.slots.len() as u64);

        inner
            .slots
            .iter()
            .map(|metric| (metric.model_name().to_string(), metric.clone()))
            .collect()
    }

    pub fn totals(&self) -> MetricsTotals {
        self.inner.read().slots.iter().collect()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let removed = inner.slots.len();

        inner.index.clear();
        inner.slots.clear();
        tracing::event!(tracing::Level::DEBUG, operation="clear", removed=removed as u64);
    }
}
