//! Process-wide registry for code that does not hold its own handle.
//!
//! The shared instance is created on first access and lives until the process
//! exits. Nothing resets it; callers that need isolation (tests in particular)
//! call [`MetricsRegistry::clear`] or build a private [`MetricsRegistry`].

use crate::metric::ModelMetric;
use crate::registry::MetricsRegistry;
use std::sync::OnceLock;

static SHARED: OnceLock<MetricsRegistry> = OnceLock::new();

pub fn shared_registry() -> &'static MetricsRegistry {
    SHARED.get_or_init(MetricsRegistry::new)
}

pub fn track(model_name: &str, success: bool) -> ModelMetric {
    shared_registry().record(model_name, success)
}

pub fn list_tracked_model_names() -> Vec<String> {
    shared_registry().list_model_names()
}
