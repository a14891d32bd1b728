use std::collections::VecDeque;

use crate::error::RollingError;

/// Grupperer effekt per sekund. Ny bøtte starter når sekundet overgår det
/// høyeste sekundet så langt; står det stille eller går bakover havner samplen
/// i gjeldende bøtte.
pub fn bucket_powers(powers: &[i32], seconds: &[u32]) -> Result<Vec<Vec<i32>>, RollingError> {
    if powers.len() != seconds.len() {
        return Err(RollingError::LengthMismatch {
            powers: powers.len(),
            seconds: seconds.len(),
        });
    }

    let mut buckets: Vec<Vec<i32>> = Vec::new();
    let mut last: Option<u32> = None;

    for (i, (&second, &power)) in seconds.iter().zip(powers).enumerate() {
        match last {
            Some(prev) if second < prev => {
                log::warn!(
                    "seconds went backwards at sample {i} ({prev} -> {second}); keeping it in the current bucket"
                );
            }
            Some(prev) if second == prev => {}
            _ => {
                buckets.push(Vec::new());
                last = Some(second);
            }
        }
        if let Some(bucket) = buckets.last_mut() {
            bucket.push(power);
        }
    }
    Ok(buckets)
}

/// Aritmetisk snitt per bøtte (bøttene er aldri tomme).
pub fn bucket_means(buckets: &[Vec<i32>]) -> Vec<f64> {
    buckets
        .iter()
        .map(|b| b.iter().map(|&p| p as f64).sum::<f64>() / b.len() as f64)
        .collect()
}

/// Glidende snitt over de siste `window` bøtte-snittene.
/// Før vinduet er fullt brukes alle bøtter så langt (kumulativt snitt).
pub fn windowed_mean(samples: &[f64], window: usize) -> Result<Vec<f64>, RollingError> {
    if window == 0 {
        return Err(RollingError::ZeroWindow);
    }

    let mut kept: VecDeque<f64> = VecDeque::with_capacity(window.min(samples.len()) + 1);
    let mut out = Vec::with_capacity(samples.len());

    for &x in samples {
        kept.push_back(x);
        if kept.len() > window {
            kept.pop_front();
        }
        out.push(kept.iter().sum::<f64>() / kept.len() as f64);
    }
    Ok(out)
}

/// To-trinns rullende snitt: bøtte per sekund → snitt per bøtte → vindu over bøtter.
/// Én utverdi per sekund-bøtte, ikke per rå sample.
pub fn rolling_average(
    powers: &[i32],
    seconds: &[u32],
    window: usize,
) -> Result<Vec<f64>, RollingError> {
    if window == 0 {
        return Err(RollingError::ZeroWindow);
    }
    let buckets = bucket_powers(powers, seconds)?;
    windowed_mean(&bucket_means(&buckets), window)
}

/// Bøtte-indeks for hver sample, samme regel som `bucket_powers`.
pub fn bucket_index(seconds: &[u32]) -> Vec<usize> {
    let mut out = Vec::with_capacity(seconds.len());
    let mut last: Option<u32> = None;
    let mut idx = 0usize;

    for &second in seconds {
        match last {
            None => last = Some(second),
            Some(prev) if second > prev => {
                idx += 1;
                last = Some(second);
            }
            Some(_) => {}
        }
        out.push(idx);
    }
    out
}

/// Sprer én-verdi-per-bøtte ut til én verdi per sample, for plotting mot `seconds`.
pub fn align_to_samples(per_bucket: &[f64], seconds: &[u32]) -> Vec<f64> {
    bucket_index(seconds)
        .into_iter()
        .filter_map(|i| per_bucket.get(i).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_index_follows_strict_increase() {
        assert_eq!(bucket_index(&[1, 1, 2, 2, 2, 5]), vec![0, 0, 1, 1, 1, 2]);
        // bakover → samme bøtte
        assert_eq!(bucket_index(&[4, 5, 3, 6]), vec![0, 1, 1, 2]);
        assert!(bucket_index(&[]).is_empty());
    }

    #[test]
    fn first_second_zero_opens_a_bucket() {
        let b = bucket_powers(&[100, 120, 140], &[0, 0, 1]).unwrap();
        assert_eq!(b, vec![vec![100, 120], vec![140]]);
    }
}
