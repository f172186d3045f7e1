use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::time::Duration,
};

use crate::{
    Cli,
    app::{Session, UiEvent},
    data::source_for,
    ui::{Screen, UI_CONFIG, render_dashboard, render_empty, render_failed, render_loading},
};

/// How often a pending fetch is polled while nothing else triggers a frame.
const LOADING_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    session: Session,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        let location = args.source_location();
        log::info!("Dataset source: {}", location);
        Self {
            session: Session::mount(source_for(location)),
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Reload => self.reload(),
            other => self.session.apply(other),
        }
    }

    /// Browser: reload the whole page.
    #[cfg(target_arch = "wasm32")]
    fn reload(&mut self) {
        match web_sys::window().map(|w| w.location().reload()) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::error!("Page reload failed ({:?}); remounting in place", e);
                self.session.remount();
            }
            None => self.session.remount(),
        }
    }

    /// Native: the closest thing to a page reload is a fresh mount.
    #[cfg(not(target_arch = "wasm32"))]
    fn reload(&mut self) {
        self.session.remount();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.session.poll();

        let events = match self.session.screen() {
            Screen::Loading { label } => {
                render_loading(ctx, &label);
                ctx.request_repaint_after(LOADING_POLL_INTERVAL);
                Vec::new()
            }
            Screen::Failed {
                message,
                retry_label,
            } => render_failed(ctx, &message, &retry_label)
                .into_iter()
                .collect(),
            Screen::Empty { label } => {
                render_empty(ctx, &label);
                Vec::new()
            }
            Screen::Dashboard(view) => render_dashboard(ctx, &view),
        };

        if !events.is_empty() {
            ctx.request_repaint();
        }
        for event in events {
            self.handle_event(event);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
