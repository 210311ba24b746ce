use eframe::egui;

use crate::app::debug::{DebugCategory, DebugLevel};
use crate::app::state::AppState;
use crate::app::theme::colors;

/// Collapsible activity console showing the in-app event log.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_HEADING,
            egui::RichText::new("Activity").strong(),
        );
        ui.label(format!("{} entries", state.debug_logger.count()));

        if ui.button("Clear").clicked() {
            state.debug_logger.clear();
        }

        ui.separator();
        ui.label("Filter:");
        let categories = [
            ("All", None),
            ("Auth", Some(DebugCategory::Auth)),
            ("Route", Some(DebugCategory::Route)),
            ("Form", Some(DebugCategory::Form)),
            ("Picture", Some(DebugCategory::Picture)),
        ];
        for (label, category) in categories {
            if ui
                .selectable_label(state.debug_filter_category == category, label)
                .clicked()
            {
                state.debug_filter_category = category;
            }
        }
    });
    ui.separator();

    let entries = match state.debug_filter_category {
        Some(category) => state.debug_logger.get_entries_by_category(category),
        None => state.debug_logger.get_entries(),
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height(160.0)
        .show(ui, |ui| {
            for entry in entries.iter().rev() {
                let color = match entry.level {
                    DebugLevel::Error => colors::FIELD_ERROR,
                    DebugLevel::Warn => colors::SKY_DARK,
                    DebugLevel::Info => colors::TEXT_PRIMARY,
                    DebugLevel::Debug => colors::TEXT_MUTED,
                };
                ui.colored_label(color, egui::RichText::new(entry.to_string()).monospace());
            }
        });
}
