//! Prometheus registry for the command line tool.
//!
//! Holds the client metrics from `zooqle_core::metrics` so a run can dump
//! them in the text exposition format.

use once_cell::sync::Lazy;
use prometheus::{Encoder, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

fn register_metrics(registry: &Registry) {
    for metric in zooqle_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_includes_client_metrics() {
        zooqle_core::metrics::SKIPPED_SEARCHES
            .with_label_values(&["blank_query"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("zooqle_skipped_searches_total"));
    }
}
