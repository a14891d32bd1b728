use std::path::Path;

use plotters::prelude::*;

use crate::types::PowerReport;

/// En linje i plottet: navn og y-verdier linjert mot `report.seconds`.
struct PlotLine<'a> {
    label: String,
    values: Box<dyn Iterator<Item = f64> + 'a>,
    color: RGBColor,
}

const PALETTE: [RGBColor; 6] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
];

fn lines(report: &PowerReport) -> Vec<PlotLine<'_>> {
    let rolling = report.rolling.iter().map(|r| {
        let values: Box<dyn Iterator<Item = f64> + '_> = Box::new(r.aligned.iter().copied());
        (r.label.clone(), values)
    });
    let cadence: Box<dyn Iterator<Item = f64> + '_> =
        Box::new(report.cadences.iter().map(|&c| c as f64));
    let force: Box<dyn Iterator<Item = f64> + '_> = Box::new(report.forces.iter().copied());

    rolling
        .chain([
            ("Instant. Cadence".to_string(), cadence),
            ("Instant. Force".to_string(), force),
        ])
        .enumerate()
        .map(|(i, (label, values))| PlotLine {
            label,
            values,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

fn y_range(report: &PowerReport) -> (f64, f64) {
    let all = report
        .rolling
        .iter()
        .flat_map(|r| r.aligned.iter().copied())
        .chain(report.cadences.iter().map(|&c| c as f64))
        .chain(report.forces.iter().copied());

    let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    // Flat serie: gi y-aksen litt høyde så linja ikke havner på kanten.
    let lo = lo.min(0.0);
    if hi > lo {
        (lo, hi + (hi - lo) * 0.05)
    } else {
        (lo, lo + 1.0)
    }
}

/// Tegner rullende effekt, kadens og kraft mot forløpte sekunder til PNG.
pub fn render_png(report: &PowerReport, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1024, 576)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = report.seconds.first().copied().unwrap_or(0) as f64;
    let x_max = report
        .seconds
        .last()
        .copied()
        .map(|s| s as f64)
        .filter(|&s| s > x_min)
        .unwrap_or(x_min + 1.0);
    let (y_min, y_max) = y_range(report);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Power", ("sans-serif", 24))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Elapsed seconds")
        .draw()?;

    for line in lines(report) {
        let color = line.color;
        let points = report.seconds.iter().map(|&s| s as f64).zip(line.values);
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
