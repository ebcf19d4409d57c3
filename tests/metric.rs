use model_metrics_rs::ModelMetric;
use std::time::{Duration, SystemTime};

#[test]
fn model_metric_when_created_then_stores_name_and_zero_counts() {
    let metric = ModelMetric::new("claude-3");

    assert_eq!(metric.model_name(), "claude-3");
    assert_eq!(metric.request_count(), 0);
    assert_eq!(metric.success_count(), 0);
    assert_eq!(metric.error_count(), 0);
    assert_eq!(metric.success_rate(), None);
}

#[test]
fn model_metric_when_created_then_timestamp_is_current() {
    let before = SystemTime::now();
    let metric = ModelMetric::new("gpt-4");
    let after = SystemTime::now();

    assert!(metric.timestamp() >= before);
    assert!(metric.timestamp() <= after);
    assert!(metric.timestamp_millis() > 0);
}

#[test]
fn record_request_when_success_then_increments_success_count() {
    let mut metric = ModelMetric::new("gpt-4");
    metric.record_request(true);

    assert_eq!(metric.request_count(), 1);
    assert_eq!(metric.success_count(), 1);
    assert_eq!(metric.error_count(), 0);
}

#[test]
fn record_request_when_failure_then_increments_error_count() {
    let mut metric = ModelMetric::new("gpt-4");
    metric.record_request(false);

    assert_eq!(metric.request_count(), 1);
    assert_eq!(metric.success_count(), 0);
    assert_eq!(metric.error_count(), 1);
}

#[test]
fn record_request_when_mixed_outcomes_then_counts_stay_balanced() {
    let mut metric = ModelMetric::new("mixtral");
    let outcomes = [true, false, true, true, false, true, false];
    for success in outcomes {
        metric.record_request(success);
        assert_eq!(
            metric.request_count(),
            metric.success_count() + metric.error_count()
        );
    }

    assert_eq!(metric.request_count(), 7);
    assert_eq!(metric.success_count(), 4);
    assert_eq!(metric.error_count(), 3);
}

#[test]
fn record_request_when_called_later_then_timestamp_is_unchanged() {
    let mut metric = ModelMetric::new("gpt-4");
    let created = metric.timestamp();

    std::thread::sleep(Duration::from_millis(5));
    metric.record_request(true);
    metric.record_request(false);

    assert_eq!(metric.timestamp(), created);
}

#[test]
fn success_rate_when_requests_recorded_then_returns_ratio() {
    let mut metric = ModelMetric::new("phi-3");
    metric.record_request(true);
    metric.record_request(true);
    metric.record_request(true);
    metric.record_request(false);

    let rate = metric.success_rate().expect("rate should exist");
    assert!((rate - 0.75).abs() < f64::EPSILON);
}
