use crate::types::{DecodedSample, TimeSeries};

/// Akkumulator eid av én pipeline-kjøring. Sekunder og kraft/kadens/effekt
/// kommer fra ulike meldinger og kan ha ulik lengde til `finish`.
#[derive(Debug, Default)]
pub struct SeriesAccumulator {
    series: TimeSeries,
}

impl SeriesAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: &DecodedSample) {
        match sample {
            DecodedSample::Power(p) => {
                self.series.forces.push(p.force);
                self.series.cadences.push(p.cadence);
                self.series.powers.push(p.power);
            }
            DecodedSample::Time(t) => self.series.seconds.push(t.elapsed_seconds),
            DecodedSample::Poll | DecodedSample::Unrecognized(_) => {}
        }
    }

    /// Rå lengder før trunkering: (sekunder, effekt).
    pub fn raw_lens(&self) -> (usize, usize) {
        (self.series.seconds.len(), self.series.powers.len())
    }

    pub fn finish(self) -> TimeSeries {
        truncate_to_shared(self.series)
    }
}

/// Kutter alle fire serier til `min(len(seconds), len(powers))`, beholder de første.
pub fn truncate_to_shared(mut series: TimeSeries) -> TimeSeries {
    let n = series.seconds.len().min(series.powers.len());
    if series.seconds.len() != series.powers.len() {
        log::debug!(
            "truncating series: seconds={} powers={} -> {}",
            series.seconds.len(),
            series.powers.len(),
            n
        );
    }
    series.seconds.truncate(n);
    series.forces.truncate(n);
    series.cadences.truncate(n);
    series.powers.truncate(n);
    series
}

/// Fold over en sample-strøm.
pub fn assemble<'a, I>(samples: I) -> TimeSeries
where
    I: IntoIterator<Item = &'a DecodedSample>,
{
    let mut acc = SeriesAccumulator::new();
    for s in samples {
        acc.push(s);
    }
    acc.finish()
}
