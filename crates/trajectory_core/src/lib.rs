//! Trajectory Core
//!
//! Turns a training-result payload (per-epoch loss records plus per-epoch
//! class probabilities) into the series and chart declarations the studio
//! draws, and owns the one-shot fetch that produces the payload.

pub mod chart;
pub mod color;
pub mod error;
pub mod fetch;
pub mod payload;
pub mod series;
pub mod state;

pub use chart::{BarSeries, GroupedBarChart, LineChart, LineSeries};
pub use color::{color_for, ClassColor, LOSS_LINE_COLOR, PALETTE};
pub use error::{FetchError, PayloadError};
pub use fetch::{FetchController, HttpSource, PayloadSource};
pub use payload::{ProbabilityVector, TrainingEpochRecord, TrainingResult};
pub use series::{
    class_field, epoch_summaries, to_loss_series, to_probability_series, ChartData,
    EpochSummary, LossPoint, ProbabilityRow, ProbabilitySeries,
};
pub use state::ViewState;
