//! Chart Renderers
//!
//! Build backend-neutral chart declarations from transformed series. The
//! studio draws these with egui_plot; nothing here keeps state between calls,
//! so the same series always yield the same declaration.

use crate::color::{color_for, ClassColor, LOSS_LINE_COLOR};
use crate::series::{class_field, LossPoint, ProbabilitySeries};

/// Share of one epoch step taken by a whole group of bars.
pub const GROUP_WIDTH: f64 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: ClassColor,
    pub stroke_width: f32,
    /// `[x, y]` pairs, unscaled.
    pub points: Vec<[f64; 2]>,
}

/// Multi-series line chart. The loss chart declares exactly one series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    /// Loss per epoch as a single line. Zero points still declare the series.
    pub fn loss(points: &[LossPoint]) -> Self {
        let points = points.iter().map(|p| [p.epoch as f64, p.loss]).collect();
        Self {
            title: "Loss Over Epochs",
            x_axis: "Epoch",
            y_axis: "Loss",
            series: vec![LineSeries {
                name: "loss".to_string(),
                color: LOSS_LINE_COLOR,
                stroke_width: 3.0,
                points,
            }],
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// One bar series: all bars of a single class.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub class_index: usize,
    pub name: String,
    pub color: ClassColor,
    /// `(display epoch, value)`; epochs where the row lacks this class are absent.
    pub bars: Vec<(usize, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupedBarChart {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub legend: bool,
    pub series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// One bar series per discovered class, colored by class index.
    pub fn probabilities(series: &ProbabilitySeries) -> Self {
        // No rows means no first row to take a shape from.
        let bars = if series.rows.is_empty() {
            Vec::new()
        } else {
            (0..series.class_count)
                .map(|k| BarSeries {
                    class_index: k,
                    name: class_field(k),
                    color: color_for(k),
                    bars: series
                        .rows
                        .iter()
                        .filter_map(|row| row.get(k).map(|v| (row.epoch, v)))
                        .collect(),
                })
                .collect()
        };

        Self {
            title: "Probabilities Per Epoch",
            x_axis: "Epoch",
            y_axis: "Probability",
            legend: true,
            series: bars,
        }
    }

    /// Width of a single bar when `class_count` bars share one epoch slot.
    pub fn bar_width(&self) -> f64 {
        GROUP_WIDTH / self.series.len().max(1) as f64
    }

    /// Horizontal offset of class `class_index` from the epoch's center.
    pub fn bar_offset(&self, class_index: usize) -> f64 {
        let width = self.bar_width();
        let start = -GROUP_WIDTH / 2.0 + width / 2.0;
        start + class_index as f64 * width
    }
}
