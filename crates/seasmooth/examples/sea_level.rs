//! Sea-Level Trend Extraction Examples
//!
//! This example walks through a typical tide-gauge workflow:
//! - Smoothing a synthetic hourly record with each method
//! - Robust smoothing of a record with sensor spikes
//! - Gaps in the record (missing observations)
//! - Exporting the residual series to a text file
//!
//! Pass a path to a two-column `time level` file to smooth real data instead
//! of the synthetic record. Set `RUST_LOG=seasmooth=debug` to see per-point
//! diagnostics from the robust passes.

use seasmooth::io::read_columns_from_path;
use seasmooth::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SmoothError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(80));
    println!("Sea-Level Trend Extraction");
    println!("{}", "=".repeat(80));
    println!();

    if let Some(path) = std::env::args().nth(1) {
        return smooth_file(&path);
    }

    example_1_methods()?;
    example_2_sensor_spikes()?;
    example_3_gaps()?;
    example_4_export()?;

    Ok(())
}

/// Synthetic hourly record: slow rise, semi-diurnal tide, small chop.
fn synthetic_record(hours: usize) -> (Vec<f64>, Vec<f64>) {
    let t: Vec<f64> = (0..hours).map(|h| h as f64).collect();
    let level = t
        .iter()
        .map(|&h| {
            let trend = 0.002 * h;
            let tide = 0.8 * (2.0 * std::f64::consts::PI * h / 12.42).sin();
            let chop = 0.05 * ((h * 1.7).sin() + (h * 3.1).cos());
            trend + tide + chop
        })
        .collect();
    (t, level)
}

/// Example 1: Method Comparison
/// Smooths the same record with each local fit
fn example_1_methods() -> Result<(), SmoothError> {
    println!("Example 1: Method Comparison");
    println!("{}", "-".repeat(80));

    let (t, level) = synthetic_record(48);

    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Hour", "Level", "lowess", "loess", "rlowess", "rloess"
    );
    let lowess = smooth(&t, &level, 9.0, "lowess")?;
    let loess = smooth(&t, &level, 9.0, "loess")?;
    let rlowess = smooth(&t, &level, 9.0, "rlowess")?;
    let rloess = smooth(&t, &level, 9.0, "rloess")?;

    for i in (0..t.len()).step_by(6) {
        println!(
            "{:>8.0} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            t[i], level[i], lowess[i], loess[i], rlowess[i], rloess[i]
        );
    }

    println!();
    Ok(())
}

/// Example 2: Sensor Spikes
/// Robust passes keep isolated spikes out of the trend
fn example_2_sensor_spikes() -> Result<(), SmoothError> {
    println!("Example 2: Sensor Spikes");
    println!("{}", "-".repeat(80));

    let (t, mut level) = synthetic_record(72);
    level[20] += 4.0;
    level[21] += 3.5;
    level[50] -= 5.0;

    let plain = Smoother::new().span(0.15).method(Loess).build()?;
    let robust = Smoother::new().span(0.15).method(RLoess).iterations(5).build()?;

    let plain_fit = plain.fit(&t, &level)?;
    let robust_fit = robust.fit(&t, &level)?;

    for &i in &[19usize, 20, 21, 22, 49, 50, 51] {
        let weight = robust_fit
            .robustness_weights
            .as_ref()
            .map_or(f64::NAN, |w| w[i]);
        println!(
            "  hour {:>3}: level {:>8.4}  loess {:>8.4}  rloess {:>8.4}  weight {:.3}",
            i, level[i], plain_fit.trend[i], robust_fit.trend[i], weight
        );
    }

    println!();
    Ok(())
}

/// Example 3: Gaps
/// Missing observations still receive a trend value
fn example_3_gaps() -> Result<(), SmoothError> {
    println!("Example 3: Gaps in the Record");
    println!("{}", "-".repeat(80));

    let (t, mut level) = synthetic_record(24);
    for i in [5usize, 6, 7, 15] {
        level[i] = f64::NAN;
    }

    let result = Smoother::new().span(7.0).method(RLowess).build()?.fit(&t, &level)?;
    println!("{}", result);

    Ok(())
}

/// Example 4: Export
/// Writes `time level residual` rows into the system temp directory
fn example_4_export() -> Result<(), SmoothError> {
    println!("Example 4: Export Residuals");
    println!("{}", "-".repeat(80));

    let (t, level) = synthetic_record(36);
    let result = Smoother::new().span(0.25).method(RLoess).build()?.fit(&t, &level)?;

    let written = result.export(std::env::temp_dir().join("sea_level_residuals"))?;
    println!("  wrote {} rows to {}", result.len(), written.display());

    println!();
    Ok(())
}

/// Smooth a two-column file given on the command line.
fn smooth_file(path: &str) -> Result<(), SmoothError> {
    let (t, level) = read_columns_from_path(path)?;

    let result = Smoother::new().span(0.1).method(RLoess).build()?.fit(&t, &level)?;
    println!("{}", result);

    let written = result.export(format!("{path}_trend"))?;
    println!("wrote residuals to {}", written.display());

    Ok(())
}
