use std::path::Path;

use crate::assembler::SeriesAccumulator;
use crate::classifier::{LineClass, LineClassifier};
use crate::config::LogConfig;
use crate::decoder::decode_payload;
use crate::error::PipelineError;
use crate::metrics::Metrics;
use crate::rolling::{align_to_samples, rolling_average};
use crate::types::{DecodedSample, PowerReport, RollingSeries, TimeSeries};

/// Én linje gjennom klassifisering og dekoding. Feil logges og linja hoppes over.
fn decode_line(
    classifier: &LineClassifier,
    line: &str,
    metrics: &Metrics,
) -> Option<DecodedSample> {
    metrics.lines_total.inc();

    let payload = match classifier.classify(line) {
        Ok(LineClass::Ignored) => return None,
        Ok(LineClass::Payload(p)) => {
            metrics.notifications_total.inc();
            p
        }
        Err(e) => {
            metrics.notifications_total.inc();
            metrics.classification_miss_total.inc();
            log::warn!("{e}: {line:?}");
            return None;
        }
    };

    let sample = match decode_payload(payload) {
        Ok(s) => s,
        Err(e) => {
            metrics.decode_error_total.inc();
            log::warn!("skipping payload <{payload}>: {e}");
            return None;
        }
    };

    match &sample {
        DecodedSample::Power(_) => metrics.power_samples_total.inc(),
        DecodedSample::Time(_) => metrics.time_samples_total.inc(),
        DecodedSample::Poll => metrics.poll_total.inc(),
        DecodedSample::Unrecognized(text) => {
            metrics.unmatched_payload_total.inc();
            log::warn!("no match for data, {text:?}");
            return None;
        }
    }
    log::debug!("decoded {sample:?}");
    Some(sample)
}

/// Klassifiser → dekod → sett sammen, over en hvilken som helst linjestrøm.
pub fn decode_lines<'a, I>(lines: I, cfg: &LogConfig, metrics: &Metrics) -> TimeSeries
where
    I: IntoIterator<Item = &'a str>,
{
    let classifier = LineClassifier::new(cfg);
    let mut acc = SeriesAccumulator::new();

    for line in lines {
        if let Some(sample) = decode_line(&classifier, line, metrics) {
            acc.push(&sample);
        }
    }

    let (n_seconds, n_powers) = acc.raw_lens();
    let series = acc.finish();
    log::info!(
        "decoded {} seconds / {} power samples, {} aligned",
        n_seconds,
        n_powers,
        series.len()
    );
    series
}

pub fn window_label(window: usize) -> String {
    format!("{window} Second Power")
}

/// Rullende serier for hvert konfigurert vindu.
pub fn rolling_series(
    series: &TimeSeries,
    windows: &[usize],
) -> Result<Vec<RollingSeries>, PipelineError> {
    windows
        .iter()
        .map(|&window| -> Result<RollingSeries, PipelineError> {
            let values = rolling_average(&series.powers, &series.seconds, window)?;
            let aligned = align_to_samples(&values, &series.seconds);
            Ok(RollingSeries {
                window,
                label: window_label(window),
                values,
                aligned,
            })
        })
        .collect()
}

/// Hele batch-kjøringen over en ferdig innlest logg.
pub fn run(text: &str, cfg: &LogConfig) -> Result<PowerReport, PipelineError> {
    cfg.validate()?;
    let metrics = Metrics::new()?;
    run_with_metrics(text, cfg, &metrics)
}

pub fn run_with_metrics(
    text: &str,
    cfg: &LogConfig,
    metrics: &Metrics,
) -> Result<PowerReport, PipelineError> {
    let series = decode_lines(text.lines(), cfg, metrics);
    let rolling = rolling_series(&series, &cfg.windows)?;

    Ok(PowerReport {
        seconds: series.seconds,
        forces: series.forces,
        cadences: series.cadences,
        powers: series.powers,
        rolling,
        stats: metrics.snapshot(),
    })
}

/// Leser loggen fra disk. Manglende eller tom fil er den eneste fatale feilen.
pub fn run_file(path: impl AsRef<Path>, cfg: &LogConfig) -> Result<PowerReport, PipelineError> {
    let metrics = Metrics::new()?;
    run_file_with_metrics(path, cfg, &metrics)
}

pub fn run_file_with_metrics(
    path: impl AsRef<Path>,
    cfg: &LogConfig,
    metrics: &Metrics,
) -> Result<PowerReport, PipelineError> {
    cfg.validate()?;
    let bytes = std::fs::read(path.as_ref())?;
    // Loggere skriver av og til halve UTF-8-sekvenser; de linjene treffer uansett ikke.
    let text = String::from_utf8_lossy(&bytes);
    if text.lines().next().is_none() {
        return Err(PipelineError::EmptyLog);
    }
    log::info!("decoding {}", path.as_ref().display());
    run_with_metrics(&text, cfg, metrics)
}
