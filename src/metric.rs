use std::time::{SystemTime, UNIX_EPOCH};

/// Request counters for a single model.
///
/// `request_count == success_count + error_count` holds at all times; the only
/// way to move the counters is [`ModelMetric::record_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetric {
    model_name: String,
    timestamp: SystemTime,
    request_count: u64,
    success_count: u64,
    error_count: u64,
}

impl ModelMetric {
    pub fn new<S: Into<String>>(model_name: S) -> Self {
        Self {
            model_name: model_name.into(),
            timestamp: SystemTime::now(),
            request_count: 0,
            success_count: 0,
            error_count: 0,
        }
    }

    #[inline]
    pub fn record_request(&mut self, success: bool) {
        // Stop both sides together so the invariant survives saturation.
        if self.request_count == u64::MAX {
            return;
        }

        self.request_count += 1;
        if success {
            self.success_count += 1;
        } else {
            self.error_count += 1;
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// First-seen time; later recordings leave it untouched.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Milliseconds since the UNIX epoch, saturating at both ends.
    pub fn timestamp_millis(&self) -> u64 {
        let millis = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        u64::try_from(millis).unwrap_or(u64::MAX)
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    pub fn success_rate(&self) -> Option<f64> {
        if self.request_count == 0 {
            return None;
        }
        Some(self.success_count as f64 / self.request_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn record_request_when_counter_is_at_max_then_counts_stay_balanced() {
        let mut metric = ModelMetric::new("saturated");
        metric.request_count = u64::MAX;
        metric.success_count = u64::MAX - 1;
        metric.error_count = 1;

        metric.record_request(true);
        metric.record_request(false);

        assert_eq!(metric.request_count, u64::MAX);
        assert_eq!(metric.success_count, u64::MAX - 1);
        assert_eq!(metric.error_count, 1);
    }

    #[test]
    fn timestamp_millis_when_clock_is_before_epoch_then_returns_zero() {
        let mut metric = ModelMetric::new("early");
        metric.timestamp = UNIX_EPOCH
            .checked_sub(Duration::from_secs(1))
            .unwrap_or(UNIX_EPOCH);

        assert_eq!(metric.timestamp_millis(), 0);
    }

    #[test]
    fn timestamp_millis_when_past_u64_range_then_saturates() {
        let Some(far) = UNIX_EPOCH.checked_add(Duration::from_secs(u64::MAX / 500)) else {
            return;
        };
        let mut metric = ModelMetric::new("far-future");
        metric.timestamp = far;

        assert_eq!(metric.timestamp_millis(), u64::MAX);
    }
}
