use serde::{Deserialize, Serialize};

use crate::metrics::DecodeStats;

/// `"%.1f %.1f|%d=%d"` fra firmware: kraft, (ubrukt) m/s, kadens, effekt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    pub force: f64,
    pub cadence: u32, // rpm
    pub power: i32,   // watt, kan være negativ
}

/// `"%d: %d polls"` fra firmware: sekunder siden oppstart (poll-antall ignoreres).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSample {
    pub elapsed_seconds: u32,
}

/// Én dekodet payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedSample {
    Power(PowerSample),
    Time(TimeSample),
    /// Diagnoselinje med poll-antall, forkastes bevisst.
    Poll,
    /// Ingen kjente mønstre traff; teksten tas vare på for logging.
    Unrecognized(String),
}

/// Fire parallelle serier. Indeksene stemmer først etter `truncate_to_shared`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub seconds: Vec<u32>,
    pub forces: Vec<f64>,
    pub cadences: Vec<u32>,
    pub powers: Vec<i32>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.seconds.len().min(self.powers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingSeries {
    pub window: usize,
    pub label: String,
    /// Én verdi per sekund-bøtte.
    pub values: Vec<f64>,
    /// `values` utvidet til én verdi per sample, linjert mot `seconds`.
    pub aligned: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReport {
    pub seconds: Vec<u32>,
    pub forces: Vec<f64>,
    pub cadences: Vec<u32>,
    pub powers: Vec<i32>,
    pub rolling: Vec<RollingSeries>,
    pub stats: DecodeStats,
}

impl PowerReport {
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }
}
