//! Built-once view of a loaded training result.

use std::sync::Arc;
use trajectory_core::{
    epoch_summaries, ChartData, EpochSummary, GroupedBarChart, LineChart, TrainingResult,
    ViewState,
};

/// Everything the window draws for a `Loaded` state.
pub struct LoadedView {
    /// `Some` when the two payload sequences disagree in length.
    pub mismatch: Option<String>,
    pub summaries: Vec<EpochSummary>,
    pub loss: LineChart,
    pub probabilities: GroupedBarChart,
}

impl LoadedView {
    pub fn build(result: &TrainingResult) -> Self {
        let data = ChartData::from_result(result);
        let mismatch = (!result.is_aligned()).then(|| {
            format!(
                "⚠ {} probability rows vs {} history records, showing {}",
                result.probabilities.len(),
                result.training_history.len(),
                result.aligned_len()
            )
        });

        Self {
            mismatch,
            summaries: epoch_summaries(result),
            loss: LineChart::loss(&data.loss),
            probabilities: GroupedBarChart::probabilities(&data.probabilities),
        }
    }
}

/// Keeps the built view for the result currently on screen.
#[derive(Default)]
pub struct ViewCache {
    current: Option<(Arc<TrainingResult>, LoadedView)>,
}

impl ViewCache {
    /// Returns the view for `state`, building it only when the result changes.
    pub fn sync(&mut self, state: &ViewState) -> Option<&LoadedView> {
        let ViewState::Loaded(result) = state else {
            self.current = None;
            return None;
        };

        let stale = !matches!(&self.current, Some((cached, _)) if Arc::ptr_eq(cached, result));
        if stale {
            self.current = Some((result.clone(), LoadedView::build(result)));
        }
        self.current.as_ref().map(|(_, view)| view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;
    use trajectory_core::TrainingEpochRecord;

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn ragged() -> Arc<TrainingResult> {
        let record = |epoch, loss| TrainingEpochRecord { epoch, loss, weights: vec![] };
        Arc::new(TrainingResult {
            probabilities: vec![
                vec![0.2, 0.3, 0.5],
                vec![0.1, 0.9],
                vec![0.3, 0.3, 0.4],
                vec![0.5],
            ],
            training_history: vec![record(0, 1.2), record(1, 0.8), record(2, 0.6)],
        })
    }

    #[test]
    fn test_repeated_frames_build_once() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let state = ViewState::Loaded(ragged());
            let mut cache = ViewCache::default();

            let view = cache.sync(&state).expect("loaded state has a view");
            assert_eq!(view.summaries.len(), 3);
            assert!(view.mismatch.is_some());
            let after_first = warnings.load(Ordering::SeqCst);
            assert!(after_first > 0);

            for _ in 0..60 {
                assert!(cache.sync(&state).is_some());
            }
            assert_eq!(warnings.load(Ordering::SeqCst), after_first);
        });
    }

    #[test]
    fn test_new_result_rebuilds() {
        let mut cache = ViewCache::default();
        let first = ViewState::Loaded(ragged());
        assert_eq!(cache.sync(&first).map(|v| v.summaries.len()), Some(3));

        let second = ViewState::Loaded(Arc::new(TrainingResult::default()));
        let view = cache.sync(&second).expect("loaded state has a view");
        assert!(view.summaries.is_empty());
        assert!(view.probabilities.series.is_empty());
        assert!(view.mismatch.is_none());

        assert!(cache.sync(&ViewState::Empty).is_none());
        assert!(cache.sync(&ViewState::Pending).is_none());
    }
}
