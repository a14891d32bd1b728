use blepower_core::{assemble, DecodedSample, PowerSample, SeriesAccumulator, TimeSample};

fn power(p: i32) -> DecodedSample {
    DecodedSample::Power(PowerSample { force: p as f64 / 100.0, cadence: 80, power: p })
}

fn time(s: u32) -> DecodedSample {
    DecodedSample::Time(TimeSample { elapsed_seconds: s })
}

#[test]
fn more_powers_than_seconds_truncates_to_seconds() {
    let mut samples: Vec<DecodedSample> = (1..=5).map(time).collect();
    samples.extend((1..=8).map(|i| power(i * 10)));

    let ts = assemble(&samples);
    assert_eq!(ts.seconds, vec![1, 2, 3, 4, 5]);
    assert_eq!(ts.powers, vec![10, 20, 30, 40, 50]);
    assert_eq!(ts.forces.len(), 5);
    assert_eq!(ts.cadences.len(), 5);
}

#[test]
fn more_seconds_than_powers_truncates_to_powers() {
    let mut samples: Vec<DecodedSample> = (1..=5).map(|i| power(i * 10)).collect();
    samples.extend((1..=8).map(time));

    let ts = assemble(&samples);
    assert_eq!(ts.len(), 5);
    assert_eq!(ts.seconds, vec![1, 2, 3, 4, 5]);
    assert_eq!(ts.powers, vec![10, 20, 30, 40, 50]);
    assert_eq!(ts.forces, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
}

#[test]
fn poll_and_unrecognized_do_not_contribute() {
    let samples = vec![
        time(1),
        DecodedSample::Poll,
        power(120),
        DecodedSample::Unrecognized("junk".into()),
    ];
    let mut acc = SeriesAccumulator::new();
    for s in &samples {
        acc.push(s);
    }
    assert_eq!(acc.raw_lens(), (1, 1));
    let ts = acc.finish();
    assert_eq!(ts.seconds, vec![1]);
    assert_eq!(ts.powers, vec![120]);
}

#[test]
fn no_time_samples_gives_empty_series() {
    let samples: Vec<DecodedSample> = (0..3).map(power).collect();
    let ts = assemble(&samples);
    assert!(ts.is_empty());
    assert!(ts.forces.is_empty() && ts.cadences.is_empty() && ts.powers.is_empty());
}
