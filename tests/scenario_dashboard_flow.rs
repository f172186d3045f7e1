mod common;

use common::{IMMIGRATION_DOC, TWO_CATEGORY_DOC, loaded_session};
use market_movements::{
    app::UiEvent,
    models::{ContributionTier, Direction, InvestorClass, ReliabilityTier},
    ui::{DashboardView, LayoutKind, Screen},
};

fn dashboard(screen: &Screen) -> &DashboardView {
    screen.dashboard().expect("dashboard should be showing")
}

#[test]
fn loaded_document_renders_selector_rows_and_toggles() {
    let session = loaded_session(IMMIGRATION_DOC);
    let screen = session.screen();
    let view = dashboard(&screen);

    assert_eq!(view.heading, "Market Movement Analysis");
    assert_eq!(view.institutional_toggle.label, "Show Institutional Patterns");
    assert_eq!(view.cpi_toggle.label, "Show CPI Impact");

    assert_eq!(view.selector.value, "immigrationRestrictions");
    assert_eq!(view.selector.options.len(), 1);
    assert_eq!(
        view.selector.selected_label(),
        Some("Immigration Restrictions (2017)")
    );

    for kind in LayoutKind::ALL {
        let layout = view.layout(kind).unwrap();
        assert_eq!(layout.impacts.len(), 1);
        let row = &layout.impacts[0];
        assert_eq!(row.index, "S&P 500");
        assert_eq!(row.movement, "0.5% to 1.2%");
        assert_eq!(row.direction, Direction::Positive);
        assert_eq!(row.direction.to_string(), "positive");
        assert_eq!(row.timing, "6-8 months");
        assert_eq!(row.volume, "1.5x average");
        assert!(layout.cpi.is_none());
        assert!(layout.institutional.is_none());
    }
}

#[test]
fn both_layouts_are_present() {
    let session = loaded_session(IMMIGRATION_DOC);
    let screen = session.screen();
    let view = dashboard(&screen);
    assert!(view.layout_by_id("mobile-view").is_some());
    assert!(view.layout_by_id("desktop-view").is_some());
    assert_eq!(
        view.layout(LayoutKind::Compact).unwrap().impacts,
        view.layout(LayoutKind::Tabular).unwrap().impacts
    );
}

#[test]
fn cpi_toggle_reveals_sector_breakdown() {
    let mut session = loaded_session(IMMIGRATION_DOC);
    session.apply(UiEvent::ToggleCpi);

    let screen = session.screen();
    let view = dashboard(&screen);
    assert_eq!(view.cpi_toggle.label, "Hide CPI Impact");

    for layout in &view.layouts {
        let cpi = layout.cpi.as_ref().expect("CPI panel");
        assert_eq!(cpi.sectors.len(), 1);
        assert_eq!(cpi.sectors[0].name, "Agricultural Products");
        assert_eq!(cpi.sectors[0].range, "0.4% to 0.8%");
        assert_eq!(cpi.sectors[0].drivers, vec!["Labor cost increases"]);
        assert_eq!(cpi.net_contribution, "0.2% to 0.3%");
        assert_eq!(cpi.net_tier, ContributionTier::Warning);
        assert_eq!(cpi.duration, "6-8 months");
    }

    session.apply(UiEvent::ToggleCpi);
    let screen = session.screen();
    let view = dashboard(&screen);
    assert_eq!(view.cpi_toggle.label, "Show CPI Impact");
    assert!(view.layouts.iter().all(|l| l.cpi.is_none()));
}

#[test]
fn institutional_toggle_shows_reference_table() {
    let mut session = loaded_session(IMMIGRATION_DOC);
    session.apply(UiEvent::ToggleInstitutional);

    let screen = session.screen();
    let view = dashboard(&screen);
    assert_eq!(view.institutional_toggle.label, "Hide Institutional Patterns");

    let panel = view.layouts[0].institutional.as_ref().unwrap();
    let classes: Vec<InvestorClass> = panel.rows.iter().map(|r| r.class).collect();
    assert_eq!(
        classes,
        vec![
            InvestorClass::HedgeFunds,
            InvestorClass::PensionFunds,
            InvestorClass::MutualFunds
        ]
    );
    let tiers: Vec<ReliabilityTier> = panel.rows.iter().map(|r| r.tier).collect();
    assert_eq!(
        tiers,
        vec![
            ReliabilityTier::High,
            ReliabilityTier::Moderate,
            ReliabilityTier::Low
        ]
    );
    assert_eq!(panel.rows[0].reliability_label, "85% reliable");

    session.apply(UiEvent::ToggleInstitutional);
    let screen = session.screen();
    assert_eq!(
        dashboard(&screen).institutional_toggle.label,
        "Show Institutional Patterns"
    );
}

#[test]
fn double_toggle_restores_the_render() {
    let mut session = loaded_session(TWO_CATEGORY_DOC);
    let before = session.screen();
    session.apply(UiEvent::ToggleCpi);
    session.apply(UiEvent::ToggleInstitutional);
    session.apply(UiEvent::ToggleInstitutional);
    session.apply(UiEvent::ToggleCpi);
    assert_eq!(session.screen(), before);
}

#[test]
fn selector_keeps_document_order_and_follows_selection() {
    let mut session = loaded_session(TWO_CATEGORY_DOC);

    {
        let screen = session.screen();
        let view = dashboard(&screen);
        let keys: Vec<&str> = view.selector.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["tariffs", "deregulation"]);
        // Default category is absent from this document.
        assert_eq!(view.selector.selected_label(), None);
        assert!(view.layouts.iter().all(|l| l.impacts.is_empty()));
    }

    session.apply(UiEvent::ToggleCpi);
    session.apply(UiEvent::SelectCategory("tariffs".into()));
    {
        let screen = session.screen();
        let view = dashboard(&screen);
        assert_eq!(view.selector.selected_label(), Some("Steel Tariffs (2018)"));
        let layout = view.layout(LayoutKind::Tabular).unwrap();
        assert_eq!(layout.impacts.len(), 2);
        assert_eq!(layout.impacts[1].movement, "-3% to -1.5%");
        let cpi = layout.cpi.as_ref().unwrap();
        assert_eq!(cpi.sectors.len(), 2);
        assert!(cpi.sectors[1].drivers.is_empty());
        assert_eq!(cpi.net_tier, ContributionTier::Favorable);
    }

    // No CPI block in this record: the panel is simply absent.
    session.apply(UiEvent::SelectCategory("deregulation".into()));
    let screen = session.screen();
    let view = dashboard(&screen);
    assert!(session.selection().show_cpi());
    assert_eq!(view.layouts[0].impacts[0].index, "KBE");
    assert!(view.layouts.iter().all(|l| l.cpi.is_none()));
}

#[test]
fn every_key_can_be_selected() {
    let mut session = loaded_session(TWO_CATEGORY_DOC);
    let keys: Vec<String> = match session.state() {
        market_movements::app::AppState::Loaded(loaded) => {
            loaded.dataset.keys().map(str::to_string).collect()
        }
        _ => panic!("expected loaded state"),
    };
    for key in keys {
        session.apply(UiEvent::SelectCategory(key.clone()));
        assert_eq!(session.selection().category(), key);
        let screen = session.screen();
        assert_eq!(dashboard(&screen).selector.value, key);
        assert!(dashboard(&screen).selector.selected_label().is_some());
    }
}

#[test]
fn empty_document_shows_no_data() {
    for body in ["{}", "null"] {
        let session = loaded_session(body);
        assert_eq!(
            session.screen(),
            Screen::Empty {
                label: "No data available".into()
            },
            "body: {}",
            body
        );
    }
}
