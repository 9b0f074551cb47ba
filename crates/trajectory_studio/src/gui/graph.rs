//! Chart drawing - egui_plot backend for the core chart declarations

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use trajectory_core::{BarSeries, ClassColor, GroupedBarChart, LineChart};

pub fn to_color32(color: ClassColor) -> egui::Color32 {
    let [r, g, b] = color.to_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Render a line chart
pub fn line_chart(ui: &mut egui::Ui, chart: &LineChart) {
    ui.heading(chart.title);

    Plot::new(chart.title)
        .height(300.0)
        .x_axis_label(chart.x_axis)
        .y_axis_label(chart.y_axis)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                let line = Line::new(points)
                    .color(to_color32(series.color))
                    .width(series.stroke_width)
                    .name(&series.name);
                plot_ui.line(line);
            }
        });
}

/// `[x, value]` of each bar, shifted to the class's slot within its epoch group.
pub fn bar_positions(chart: &GroupedBarChart, series: &BarSeries) -> Vec<[f64; 2]> {
    let offset = chart.bar_offset(series.class_index);
    series
        .bars
        .iter()
        .map(|&(epoch, value)| [epoch as f64 + offset, value])
        .collect()
}

/// Render a grouped bar chart
pub fn grouped_bar_chart(ui: &mut egui::Ui, chart: &GroupedBarChart) {
    ui.heading(chart.title);

    let mut plot = Plot::new(chart.title)
        .height(400.0)
        .x_axis_label(chart.x_axis)
        .y_axis_label(chart.y_axis);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    let width = chart.bar_width();
    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let color = to_color32(series.color);
            let bars = bar_positions(chart, series)
                .into_iter()
                .map(|[x, value]| Bar::new(x, value).width(width).fill(color))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(color).name(&series.name));
        }
    });
}
