use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use serde::{Deserialize, Serialize};

/// Tellere for én dekodings-kjøring. Eget registry per instans, ingen global tilstand.
pub struct Metrics {
    registry: Registry,
    pub lines_total: IntCounter,
    pub notifications_total: IntCounter,
    pub classification_miss_total: IntCounter,
    pub decode_error_total: IntCounter,
    pub unmatched_payload_total: IntCounter,
    pub poll_total: IntCounter,
    pub power_samples_total: IntCounter,
    pub time_samples_total: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> prometheus::Result<IntCounter> {
    let c = IntCounter::with_opts(Opts::new(name, help).namespace("blepower"))?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        Ok(Self {
            lines_total: counter(&registry, "lines_total", "Log lines scanned")?,
            notifications_total: counter(
                &registry,
                "notifications_total",
                "Notification lines for the tracked characteristic",
            )?,
            classification_miss_total: counter(
                &registry,
                "classification_miss_total",
                "Notification lines without a <hex> payload",
            )?,
            decode_error_total: counter(&registry, "decode_error_total", "Payloads that were not valid hex/UTF-8")?,
            unmatched_payload_total: counter(
                &registry,
                "unmatched_payload_total",
                "Decoded payloads matching no known record",
            )?,
            poll_total: counter(&registry, "poll_total", "Poll-count diagnostic records")?,
            power_samples_total: counter(&registry, "power_samples_total", "Force/cadence/power records")?,
            time_samples_total: counter(&registry, "time_samples_total", "Elapsed-seconds records")?,
            registry,
        })
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn snapshot(&self) -> DecodeStats {
        DecodeStats {
            lines: self.lines_total.get(),
            notifications: self.notifications_total.get(),
            classification_misses: self.classification_miss_total.get(),
            decode_errors: self.decode_error_total.get(),
            unmatched_payloads: self.unmatched_payload_total.get(),
            polls: self.poll_total.get(),
            power_samples: self.power_samples_total.get(),
            time_samples: self.time_samples_total.get(),
        }
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Metrics").field(&self.snapshot()).finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeStats {
    pub lines: u64,
    pub notifications: u64,
    pub classification_misses: u64,
    pub decode_errors: u64,
    pub unmatched_payloads: u64,
    pub polls: u64,
    pub power_samples: u64,
    pub time_samples: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_namespaced_counters() {
        let m = Metrics::new().unwrap();
        m.lines_total.inc_by(3);
        m.poll_total.inc();
        let text = m.render().unwrap();
        assert!(text.contains("blepower_lines_total 3"));
        assert!(text.contains("blepower_poll_total 1"));
        assert_eq!(m.snapshot().lines, 3);
    }

    #[test]
    fn each_run_has_its_own_counters() {
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();
        a.lines_total.inc_by(5);
        assert_eq!(a.snapshot().lines, 5);
        assert_eq!(b.snapshot().lines, 0);
        assert!(b.render().unwrap().contains("blepower_lines_total 0"));
    }
}
