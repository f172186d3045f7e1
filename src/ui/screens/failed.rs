use {
    crate::{
        app::UiEvent,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Button, CentralPanel, Context, RichText},
};

/// Error panel with a single recovery action. Returns `Reload` when clicked.
pub(crate) fn render_failed(ctx: &Context, message: &str, retry_label: &str) -> Option<UiEvent> {
    let mut event = None;
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.label(
                    RichText::new(message)
                        .size(18.0)
                        .color(UI_CONFIG.colors.error),
                );
                ui.add_space(16.0);
                let retry = Button::new(
                    RichText::new(format!("{} {}", UI_TEXT.icon_reload, retry_label))
                        .size(16.0)
                        .color(UI_CONFIG.colors.heading),
                )
                .fill(UI_CONFIG.colors.card);
                if ui.add(retry).clicked() {
                    event = Some(UiEvent::Reload);
                }
            });
        });
    event
}
