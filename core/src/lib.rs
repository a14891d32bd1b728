//! BLE-logg → kraft/kadens/effekt-serier → rullende effekt (3s/10s/60s).
//!
//! Flyten går én vei: rå linjer → klassifiserte linjer → dekodede samples
//! → linjerte serier → rullende snitt.

pub mod assembler;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod rolling;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use assembler::{assemble, truncate_to_shared, SeriesAccumulator};
pub use classifier::{find_payload, LineClass, LineClassifier};
pub use config::{load_config, save_config, LogConfig, DEFAULT_WINDOWS};
pub use decoder::{classify_text, decode_hex, decode_payload};
pub use error::{ClassifyError, ConfigError, DecodeError, PipelineError, RollingError};
pub use metrics::{DecodeStats, Metrics};
pub use pipeline::{decode_lines, run, run_file};
pub use rolling::rolling_average;
pub use types::{DecodedSample, PowerReport, PowerSample, RollingSeries, TimeSample, TimeSeries};
