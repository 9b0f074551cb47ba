//! Per-epoch listing shown above the charts.

use eframe::egui;
use trajectory_core::EpochSummary;

pub fn show(ui: &mut egui::Ui, summaries: &[EpochSummary], open: &mut bool) {
    let header = format!("Epochs ({})", summaries.len());
    let response = egui::CollapsingHeader::new(header)
        .open(Some(*open))
        .show(ui, |ui| {
            egui::Grid::new("epoch_listing")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for summary in summaries {
                        ui.label(
                            egui::RichText::new(format!("Probability {}:", summary.display_epoch))
                                .strong(),
                        );
                        ui.label(summary.probability_text());
                        ui.end_row();

                        ui.label(egui::RichText::new("Loss:").strong());
                        ui.label(summary.loss.to_string());
                        ui.end_row();
                    }
                });
        });

    if response.header_response.clicked() {
        *open = !*open;
    }
}
