use {
    crate::{
        app::UiEvent,
        ui::{
            CpiPanel, DashboardView, InstitutionalPanel, LayoutKind, LayoutStyle, LayoutView,
            SectorRow, SelectorView, ToggleView, ToneColor, UI_CONFIG, UI_TEXT, UiStyleExt,
            colored_heading,
        },
    },
    eframe::egui::{
        Align, Button, CentralPanel, ComboBox, Context, Grid, Layout, RichText, ScrollArea,
        TopBottomPanel, Ui,
    },
    egui_extras::{Column, TableBuilder},
};

/// Paints a loaded dashboard and returns the interactions of this frame.
pub(crate) fn render_dashboard(ctx: &Context, view: &DashboardView) -> Vec<UiEvent> {
    let mut events = Vec::new();

    TopBottomPanel::top("dashboard_header")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| render_header(ui, view, &mut events));

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            let kind = LayoutKind::for_width(ui.available_width());
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(UI_CONFIG.max_content_width);
                    render_selector(ui, &view.selector, &mut events);
                    ui.add_space(16.0);
                    if let Some(layout) = view.layout(kind) {
                        ui.push_id(kind.test_id(), |ui| render_layout(ui, layout));
                    }
                });
        });

    events
}

fn render_header(ui: &mut Ui, view: &DashboardView, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(UI_TEXT.icon_table).size(22.0));
        ui.label(colored_heading(view.heading.as_str(), 22.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // Right-to-left: last button first.
            if toggle_button(ui, &view.cpi_toggle) {
                events.push(UiEvent::ToggleCpi);
            }
            if toggle_button(ui, &view.institutional_toggle) {
                events.push(UiEvent::ToggleInstitutional);
            }
        });
    });
}

fn toggle_button(ui: &mut Ui, toggle: &ToggleView) -> bool {
    ui.add(Button::new(RichText::new(toggle.label.as_str()).size(14.0)).selected(toggle.active))
        .clicked()
}

fn render_selector(ui: &mut Ui, selector: &SelectorView, events: &mut Vec<UiEvent>) {
    ui.label_subdued(selector.hint.as_str(), 13.0);
    let selected_text = selector
        .selected_label()
        .unwrap_or(selector.hint.as_str());
    ComboBox::from_id_salt("category_selector")
        .selected_text(RichText::new(selected_text).size(16.0))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in &selector.options {
                let is_selected = option.key == selector.value;
                if ui
                    .selectable_label(is_selected, option.label.as_str())
                    .clicked()
                {
                    events.push(UiEvent::SelectCategory(option.key.clone()));
                }
            }
        });
}

fn render_layout(ui: &mut Ui, layout: &LayoutView) {
    let style = UI_CONFIG.layout_style(layout.kind);
    match layout.kind {
        LayoutKind::Compact => render_impact_cards(ui, layout, style),
        LayoutKind::Tabular => render_impact_table(ui, layout, style),
    }
    if let Some(cpi) = &layout.cpi {
        render_cpi_panel(ui, cpi, layout.kind, style);
    }
    if let Some(patterns) = &layout.institutional {
        render_institutional_panel(ui, patterns, layout.kind, style);
    }
}

fn body_text(text: &str, style: &LayoutStyle) -> RichText {
    RichText::new(text)
        .size(style.body_size)
        .color(UI_CONFIG.colors.label)
}

fn render_impact_cards(ui: &mut Ui, layout: &LayoutView, style: &LayoutStyle) {
    for (i, impact) in layout.impacts.iter().enumerate() {
        UI_CONFIG.card_frame(style).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(impact.index.as_str())
                    .strong()
                    .size(style.heading_size)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(4.0);
            Grid::new(("impact_card", i))
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.metric(UI_TEXT.col_movement, body_text(&impact.movement, style));
                    ui.vertical(|ui| {
                        ui.label_subdued(UI_TEXT.col_direction, 12.0);
                        ui.badge(
                            &impact.direction.to_string(),
                            &impact.direction,
                            style.body_size - 1.0,
                        );
                    });
                    ui.end_row();
                    ui.metric(UI_TEXT.col_timing, body_text(&impact.timing, style));
                    ui.metric(UI_TEXT.col_volume, body_text(&impact.volume, style));
                    ui.end_row();
                });
        });
        ui.add_space(10.0);
    }
}

fn render_impact_table(ui: &mut Ui, layout: &LayoutView, style: &LayoutStyle) {
    UI_CONFIG.card_frame(style).show(ui, |ui| {
        TableBuilder::new(ui)
            .id_salt("impact_table")
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto().at_least(160.0))
            .columns(Column::auto().at_least(120.0), 3)
            .column(Column::remainder())
            .header(style.row_height, |mut header| {
                for title in [
                    UI_TEXT.col_index,
                    UI_TEXT.col_movement,
                    UI_TEXT.col_direction,
                    UI_TEXT.col_timing,
                    UI_TEXT.col_volume,
                ] {
                    header.col(|ui| {
                        ui.label(colored_heading(title, style.heading_size));
                    });
                }
            })
            .body(|mut body| {
                for impact in &layout.impacts {
                    body.row(style.row_height, |mut row| {
                        row.col(|ui| {
                            ui.label(
                                RichText::new(impact.index.as_str())
                                    .strong()
                                    .size(style.body_size)
                                    .color(UI_CONFIG.colors.heading),
                            );
                        });
                        row.col(|ui| {
                            ui.label(body_text(&impact.movement, style));
                        });
                        row.col(|ui| {
                            ui.badge(
                                &impact.direction.to_string(),
                                &impact.direction,
                                style.body_size,
                            );
                        });
                        row.col(|ui| {
                            ui.label(body_text(&impact.timing, style));
                        });
                        row.col(|ui| {
                            ui.label(body_text(&impact.volume, style));
                        });
                    });
                }
            });
    });
}

fn render_cpi_panel(ui: &mut Ui, cpi: &CpiPanel, kind: LayoutKind, style: &LayoutStyle) {
    ui.add_space(16.0);
    ui.label(colored_heading(UI_TEXT.cpi_heading, style.heading_size));
    ui.add_space(8.0);

    let net = RichText::new(cpi.net_contribution.as_str())
        .size(style.body_size)
        .strong()
        .color(cpi.net_tier.color());

    match kind {
        LayoutKind::Compact => {
            for sector in &cpi.sectors {
                sector_card(ui, sector, style);
                ui.add_space(8.0);
            }
            key_value_card(ui, UI_TEXT.cpi_range, net, style);
            ui.add_space(8.0);
            key_value_card(
                ui,
                UI_TEXT.cpi_duration,
                body_text(&cpi.duration, style),
                style,
            );
        }
        LayoutKind::Tabular => {
            ui.columns(2, |columns| {
                for sector in &cpi.sectors {
                    sector_card(&mut columns[0], sector, style);
                    columns[0].add_space(8.0);
                }
                key_value_card(&mut columns[1], UI_TEXT.cpi_range, net, style);
                columns[1].add_space(8.0);
                key_value_card(
                    &mut columns[1],
                    UI_TEXT.cpi_duration,
                    body_text(&cpi.duration, style),
                    style,
                );
            });
        }
    }
}

fn sector_card(ui: &mut Ui, sector: &SectorRow, style: &LayoutStyle) {
    UI_CONFIG.card_frame(style).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(sector.name.as_str())
                    .strong()
                    .size(style.body_size)
                    .color(UI_CONFIG.colors.heading),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(body_text(&sector.range, style));
            });
        });
        ui.add_space(4.0);
        for driver in &sector.drivers {
            ui.bullet(driver, style.body_size - 1.0);
        }
    });
}

fn key_value_card(ui: &mut Ui, key: &str, value: RichText, style: &LayoutStyle) {
    UI_CONFIG.card_frame(style).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(body_text(key, style).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(value);
            });
        });
    });
}

fn render_institutional_panel(
    ui: &mut Ui,
    panel: &InstitutionalPanel,
    kind: LayoutKind,
    style: &LayoutStyle,
) {
    ui.add_space(16.0);
    ui.label(colored_heading(UI_TEXT.institutional_heading, style.heading_size));
    ui.add_space(8.0);

    let columns = style.pattern_columns.max(1);
    Grid::new(("institutional_patterns", kind.test_id()))
        .num_columns(columns)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, row) in panel.rows.iter().enumerate() {
                UI_CONFIG.card_frame(style).show(ui, |ui| {
                    ui.label(
                        RichText::new(row.class.to_string())
                            .strong()
                            .size(style.body_size)
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(row.signal_type.as_str(), style.body_size - 2.0);
                    ui.label_subdued(row.timing.as_str(), 12.0);
                    ui.label_subdued(
                        format!("{}: {}", UI_TEXT.volume_threshold, row.volume_threshold),
                        12.0,
                    );
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.reliability_bar(row.reliability, row.tier, style.reliability_bar_width);
                        ui.label(
                            RichText::new(row.reliability_label.as_str())
                                .size(12.0)
                                .color(UI_CONFIG.colors.label),
                        );
                    });
                });

                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
}
