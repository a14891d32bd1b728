use crate::report::summarize;
use crate::types::PowerReport;

pub fn print_power_report(report: &PowerReport) {
    let summary = summarize(report);
    let stats = &report.stats;

    println!("--- Power Report ---");
    println!(
        "Lines: {} (notifications {}, misses {}, decode errors {}, unmatched {})",
        stats.lines,
        stats.notifications,
        stats.classification_misses,
        stats.decode_errors,
        stats.unmatched_payloads
    );
    println!("Samples: {} over {} s", summary.samples, summary.duration_secs);
    println!("Sample watt: {:?}", &report.powers[..5.min(report.powers.len())]);

    match (summary.avg_power, summary.max_power) {
        (Some(avg), Some(max)) => println!("Avg watt: {:.1} (max {})", avg, max),
        _ => println!("Avg watt: n/a"),
    }
    if let Some(cad) = summary.avg_cadence {
        println!("Avg cadence: {:.1}", cad);
    }
    for (label, value) in &summary.final_rolling {
        println!("{}: {:.1}", label, value);
    }
}
