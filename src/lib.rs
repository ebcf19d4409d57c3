pub mod metric;
pub mod registry;
pub mod shared;
pub mod types;

pub use metric::ModelMetric;
pub use registry::{
    MetricsRegistry, MetricsTotals, RegistryOptions, RegistryOptionsBuilder, RegistryOptionsError,
};
pub use shared::{list_tracked_model_names, shared_registry, track};
pub use types::MetricsSnapshot;
