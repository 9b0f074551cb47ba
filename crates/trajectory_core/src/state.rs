//! View State
//!
//! The single cell the page shell reads. Only [`crate::FetchController`] writes it.

use std::sync::Arc;

use crate::payload::TrainingResult;

#[derive(Clone, Debug, Default)]
pub enum ViewState {
    /// Nothing to show: before activation, or after a failed fetch.
    #[default]
    Empty,
    /// The fetch is in flight.
    Pending,
    Loaded(Arc<TrainingResult>),
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::Pending)
    }

    pub fn result(&self) -> Option<&TrainingResult> {
        match self {
            ViewState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Empty => "empty",
            ViewState::Pending => "pending",
            ViewState::Loaded(_) => "loaded",
        }
    }
}
