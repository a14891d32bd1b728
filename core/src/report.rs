use std::io::Write;

use serde::Serialize;

use crate::types::PowerReport;

/// Sammendrag av en rapport, for utskrift og JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub samples: usize,
    pub duration_secs: u32,
    pub avg_power: Option<f64>,
    pub max_power: Option<i32>,
    pub avg_cadence: Option<f64>,
    /// Siste verdi per rullende vindu: (label, watt).
    pub final_rolling: Vec<(String, f64)>,
}

pub fn summarize(report: &PowerReport) -> ReportSummary {
    let n = report.powers.len();
    let avg = |sum: f64| if n == 0 { None } else { Some(sum / n as f64) };

    let duration_secs = match (report.seconds.first(), report.seconds.last()) {
        (Some(first), Some(last)) => last.saturating_sub(*first),
        _ => 0,
    };

    ReportSummary {
        samples: n,
        duration_secs,
        avg_power: avg(report.powers.iter().map(|&p| p as f64).sum()),
        max_power: report.powers.iter().copied().max(),
        avg_cadence: avg(report.cadences.iter().map(|&c| c as f64).sum()),
        final_rolling: report
            .rolling
            .iter()
            .filter_map(|r| r.values.last().map(|v| (r.label.clone(), *v)))
            .collect(),
    }
}

/// Én rad per linjert sample: second, force, cadence, power, <rullende kolonner>.
pub fn write_csv<W: Write>(report: &PowerReport, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![
        "second".to_string(),
        "force".to_string(),
        "cadence".to_string(),
        "power".to_string(),
    ];
    header.extend(report.rolling.iter().map(|r| format!("power_{}s", r.window)));
    wtr.write_record(&header)?;

    for i in 0..report.len() {
        let mut row = vec![
            report.seconds[i].to_string(),
            format!("{:.1}", report.forces[i]),
            report.cadences[i].to_string(),
            report.powers[i].to_string(),
        ];
        row.extend(
            report
                .rolling
                .iter()
                .map(|r| r.aligned.get(i).map(|v| format!("{v:.2}")).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
