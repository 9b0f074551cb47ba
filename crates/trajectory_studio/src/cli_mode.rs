//! Headless commands: print what the window would show.

use anyhow::{Context, Result};
use std::io::{self, Write};
use trajectory_core::{
    class_field, color_for, epoch_summaries, ChartData, PayloadSource, TrainingResult,
};

use crate::cli::ColorsArgs;
use crate::config::StudioConfig;

pub fn run_summary(config: &StudioConfig) -> Result<()> {
    let result = config
        .http_source()
        .fetch()
        .with_context(|| format!("Failed to fetch training result from {}", config.backend_url))?;

    let stdout = io::stdout();
    write_summary(&result, &mut stdout.lock())?;
    Ok(())
}

pub fn write_summary(result: &TrainingResult, out: &mut impl Write) -> io::Result<()> {
    let data = ChartData::from_result(result);

    writeln!(out, "Neural Network Visualization")?;
    writeln!(
        out,
        "Epochs: {} (classes: {})",
        result.epoch_count(),
        data.probabilities.class_count
    )?;
    if !result.is_aligned() {
        writeln!(
            out,
            "Warning: {} probability rows vs {} history records",
            result.probabilities.len(),
            result.training_history.len()
        )?;
    }

    for summary in epoch_summaries(result) {
        writeln!(
            out,
            "Probability {}: {}",
            summary.display_epoch,
            summary.probability_text()
        )?;
        writeln!(out, "Loss: {}", summary.loss)?;
    }

    match loss_range(&data) {
        Some((min, max)) => writeln!(out, "Loss range: {} .. {}", min, max)?,
        None => writeln!(out, "Loss range: n/a")?,
    }
    Ok(())
}

/// Smallest and largest finite loss.
fn loss_range(data: &ChartData) -> Option<(f64, f64)> {
    data.loss
        .iter()
        .map(|p| p.loss)
        .filter(|l| l.is_finite())
        .fold(None, |range, l| match range {
            None => Some((l, l)),
            Some((min, max)) => Some((min.min(l), max.max(l))),
        })
}

pub fn run_colors(args: &ColorsArgs) -> Result<()> {
    let stdout = io::stdout();
    write_colors(args.count, &mut stdout.lock())?;
    Ok(())
}

pub fn write_colors(count: usize, out: &mut impl Write) -> io::Result<()> {
    for k in 0..count {
        let [r, g, b] = color_for(k).to_rgb();
        writeln!(
            out,
            "{:<10} {:<20} rgb({}, {}, {})",
            class_field(k),
            color_for(k).to_string(),
            r,
            g,
            b
        )?;
    }
    Ok(())
}
