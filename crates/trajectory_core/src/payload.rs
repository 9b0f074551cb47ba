//! Payload Model
//!
//! The typed shape of one training result as delivered by the backend.
//! Parsing is strict about field presence and types, and lenient about
//! shape agreement between the two sequences (see [`TrainingResult::aligned_len`]).

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Class probabilities for one epoch, one entry per class.
pub type ProbabilityVector = Vec<f64>;

/// One completed training epoch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrainingEpochRecord {
    pub epoch: u64,
    /// Carried as-is: no sign or range checks.
    pub loss: f64,
    /// Parameter snapshot. Kept for display; no chart reads it.
    pub weights: Vec<f64>,
}

/// Full payload of a single fetch.
///
/// `probabilities[i]` pairs with `training_history[i]` by position only.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResult {
    pub probabilities: Vec<ProbabilityVector>,
    pub training_history: Vec<TrainingEpochRecord>,
}

impl TrainingResult {
    /// Parses an already-decoded JSON value.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, PayloadError> {
        Self::deserialize(value).map_err(PayloadError::Schema)
    }

    /// Parses a raw response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PayloadError> {
        serde_json::from_slice(bytes).map_err(PayloadError::from_serde)
    }

    pub fn from_json_str(text: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(text).map_err(PayloadError::from_serde)
    }

    /// Number of epochs both sequences can answer for.
    pub fn aligned_len(&self) -> usize {
        self.probabilities.len().min(self.training_history.len())
    }

    /// Whether `probabilities` and `trainingHistory` have the same length.
    pub fn is_aligned(&self) -> bool {
        self.probabilities.len() == self.training_history.len()
    }

    pub fn epoch_count(&self) -> usize {
        self.aligned_len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_len() == 0
    }
}
