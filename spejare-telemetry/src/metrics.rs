//! ## spejare-telemetry::metrics
//! Prometheus counters for the capture loop. Process-internal; there is no
//! export surface, `gather_metrics` renders the text format on demand.

use prometheus::{Counter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub frames_total: Counter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let frames_total =
            Counter::new("spejare_frames_total", "Total frames pulled from the source").unwrap();

        registry.register(Box::new(frames_total.clone())).unwrap();

        Self {
            registry,
            frames_total,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_frames(&self) {
        self.frames_total.inc();
    }
}
