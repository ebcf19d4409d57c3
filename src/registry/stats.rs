use crate::metric::ModelMetric;

/// Counts summed across every tracked model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricsTotals {
    pub models: usize,
    pub requests: u64,
    pub successes: u64,
    pub errors: u64,
}

impl MetricsTotals {
    pub fn accumulate(&mut self, metric: &ModelMetric) {
        self.models += 1;
        self.requests = self.requests.saturating_add(metric.request_count());
        self.successes = self.successes.saturating_add(metric.success_count());
        self.errors = self.errors.saturating_add(metric.error_count());
    }
}

impl<'a> FromIterator<&'a ModelMetric> for MetricsTotals {
    fn from_iter<I: IntoIterator<Item = &'a ModelMetric>>(iter: I) -> Self {
        let mut totals = MetricsTotals::default();
        for metric in iter {
            totals.accumulate(metric);
        }
        totals
    }
}
