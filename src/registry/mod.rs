mod options;
mod stats;
mod store;

pub use options::{
    DEFAULT_INITIAL_CAPACITY, MAX_INITIAL_CAPACITY, RegistryOptions, RegistryOptionsBuilder,
    RegistryOptionsError,
};
pub use stats::MetricsTotals;
pub use store::MetricsRegistry;
