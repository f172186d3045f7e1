use {
    crate::ui::{UI_CONFIG, UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText},
};

/// Loading indicator only: no selector, no table.
pub(crate) fn render_loading(ctx: &Context, label: &str) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    RichText::new(label)
                        .size(18.0)
                        .color(UI_CONFIG.colors.label),
                );
            });
        });
}

/// Loaded document without a single category.
pub(crate) fn render_empty(ctx: &Context, label: &str) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.label(
                    RichText::new(label)
                        .size(18.0)
                        .color(UI_CONFIG.colors.subdued),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new(UI_TEXT.heading)
                        .italics()
                        .color(UI_CONFIG.colors.subdued),
                );
            });
        });
}
