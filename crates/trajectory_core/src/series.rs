//! Series Transformer
//!
//! Reshapes a [`TrainingResult`] into the row-oriented series each chart
//! consumes. Every function here is pure and total: empty input gives empty
//! output, and ragged input degrades instead of failing.

use tracing::warn;

use crate::payload::{ProbabilityVector, TrainingEpochRecord, TrainingResult};

/// One point of the loss line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LossPoint {
    pub epoch: u64,
    pub loss: f64,
}

/// One epoch of the probability chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityRow {
    /// Display epoch, `row index + 1`. Not joined against `TrainingEpochRecord::epoch`.
    pub epoch: usize,
    /// Value for `Class k` at position `k`. May be shorter than the series' class count.
    pub values: Vec<f64>,
}

impl ProbabilityRow {
    /// Value of class `k`, or `None` when this row does not carry it.
    pub fn get(&self, class_index: usize) -> Option<f64> {
        self.values.get(class_index).copied()
    }

    /// `(field name, value)` pairs in class order.
    pub fn fields(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(k, v)| (class_field(k), *v))
    }
}

/// Probability rows plus the class count discovered from the first row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilitySeries {
    pub class_count: usize,
    pub rows: Vec<ProbabilityRow>,
}

impl ProbabilitySeries {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Field name used for class `k` in rows, legends and tooltips.
pub fn class_field(class_index: usize) -> String {
    format!("Class {}", class_index)
}

/// Loss line points, one per record, in payload order.
pub fn to_loss_series(training_history: &[TrainingEpochRecord]) -> Vec<LossPoint> {
    training_history
        .iter()
        .map(|record| LossPoint {
            epoch: record.epoch,
            loss: record.loss,
        })
        .collect()
}

/// Flattens each probability vector into a display row.
///
/// The first vector fixes the class count. Longer rows are cut to that shape;
/// shorter rows simply lack the missing classes.
pub fn to_probability_series(probabilities: &[ProbabilityVector]) -> ProbabilitySeries {
    let class_count = probabilities.first().map_or(0, Vec::len);

    let rows = probabilities
        .iter()
        .enumerate()
        .map(|(i, vector)| {
            if vector.len() != class_count {
                warn!(
                    "Epoch {} has {} class probabilities, expected {}",
                    i + 1,
                    vector.len(),
                    class_count
                );
            }
            let kept = vector.len().min(class_count);
            ProbabilityRow {
                epoch: i + 1,
                values: vector[..kept].to_vec(),
            }
        })
        .collect();

    ProbabilitySeries { class_count, rows }
}

/// Both chart series, cut to the epochs the payload can pair up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub loss: Vec<LossPoint>,
    pub probabilities: ProbabilitySeries,
}

impl ChartData {
    pub fn from_result(result: &TrainingResult) -> Self {
        let n = result.aligned_len();
        if !result.is_aligned() {
            warn!(
                "Payload length mismatch: {} probability rows vs {} history records, charting {}",
                result.probabilities.len(),
                result.training_history.len(),
                n
            );
        }

        Self {
            loss: to_loss_series(&result.training_history[..n]),
            probabilities: to_probability_series(&result.probabilities[..n]),
        }
    }
}

/// One line of the per-epoch text listing.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochSummary {
    pub display_epoch: usize,
    pub probabilities: Vec<f64>,
    pub loss: f64,
}

impl EpochSummary {
    pub fn probability_text(&self) -> String {
        self.probabilities
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-epoch listing pairing each probability vector with its loss.
pub fn epoch_summaries(result: &TrainingResult) -> Vec<EpochSummary> {
    result
        .probabilities
        .iter()
        .zip(&result.training_history)
        .enumerate()
        .map(|(i, (probabilities, record))| EpochSummary {
            display_epoch: i + 1,
            probabilities: probabilities.clone(),
            loss: record.loss,
        })
        .collect()
}
