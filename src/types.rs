use crate::metric::ModelMetric;
use std::collections::HashMap;

/// Snapshots use the std map so callers need no `hashbrown` dependency of
/// their own; the registry keeps `hashbrown` internally.
pub type MetricsSnapshot = HashMap<String, ModelMetric>;
