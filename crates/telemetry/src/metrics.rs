//! Internal metrics collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// A gauge metric (can go up or down).
#[derive(Debug, Default)]
pub struct Gauge(AtomicU64);

impl Gauge {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn set(&self, val: u64) {
        self.0.store(val, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Histogram for latency tracking.
#[derive(Debug)]
pub struct Histogram {
    /// Buckets: 1ms, 5ms, 10ms, 25ms, 50ms, 100ms, 250ms, 500ms, 1s, 5s, 10s
    buckets: [AtomicU64; 11],
    sum: AtomicU64,
    count: AtomicU64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    const BUCKET_BOUNDS: [u64; 11] = [1, 5, 10, 25, 50, 100, 250, 500, 1000, 5000, 10000];

    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Records a value in milliseconds.
    pub fn observe(&self, ms: u64) {
        self.sum.fetch_add(ms, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        for (i, &bound) in Self::BUCKET_BOUNDS.iter().enumerate() {
            if ms <= bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
                break;
            }
        }
    }

    pub fn mean(&self) -> f64 {
        let count = self.count.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        self.sum.load(Ordering::Relaxed) as f64 / count as f64
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn buckets(&self) -> Vec<(u64, u64)> {
        Self::BUCKET_BOUNDS
            .iter()
            .zip(self.buckets.iter())
            .map(|(&bound, count)| (bound, count.load(Ordering::Relaxed)))
            .collect()
    }
}

/// Collected metrics for the analytics service.
#[derive(Debug, Default)]
pub struct Metrics {
    // Per-endpoint request counters
    pub funnel_requests: Counter,
    pub revenue_requests: Counter,
    pub channel_requests: Counter,
    pub insight_requests: Counter,
    pub digest_requests: Counter,

    // Upstream fetch metrics
    pub records_fetched: Counter,
    pub fetch_failures: Counter,

    // Digest capability metrics
    pub digest_fallbacks: Counter,

    // Latency
    pub analytics_latency_ms: Histogram,

    // Gauges
    pub last_fetch_records: Gauge,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total analytics requests served across endpoints.
    pub fn requests_served(&self) -> u64 {
        self.funnel_requests.get()
            + self.revenue_requests.get()
            + self.channel_requests.get()
            + self.insight_requests.get()
            + self.digest_requests.get()
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub funnel_requests: u64,
    pub revenue_requests: u64,
    pub channel_requests: u64,
    pub insight_requests: u64,
    pub digest_requests: u64,
    pub records_fetched: u64,
    pub fetch_failures: u64,
    pub digest_fallbacks: u64,
    pub analytics_latency_mean_ms: f64,
    pub last_fetch_records: u64,
}

impl Metrics {
    /// Takes a snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            timestamp: Utc::now(),
            funnel_requests: self.funnel_requests.get(),
            revenue_requests: self.revenue_requests.get(),
            channel_requests: self.channel_requests.get(),
            insight_requests: self.insight_requests.get(),
            digest_requests: self.digest_requests.get(),
            records_fetched: self.records_fetched.get(),
            fetch_failures: self.fetch_failures.get(),
            digest_fallbacks: self.digest_fallbacks.get(),
            analytics_latency_mean_ms: self.analytics_latency_ms.mean(),
            last_fetch_records: self.last_fetch_records.get(),
        }
    }
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::new);

/// Get the global metrics instance.
pub fn metrics() -> &'static Metrics {
    &METRICS
}
