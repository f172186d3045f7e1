use {
    crate::{
        models::{ContributionTier, Direction, ReliabilityTier},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{Color32, CornerRadius, Frame, Margin, ProgressBar, RichText, Ui},
};

pub(crate) fn colored_heading(text: impl Into<String>, size: f32) -> RichText {
    RichText::new(text.into())
        .size(size)
        .strong()
        .color(UI_CONFIG.colors.heading)
}

/// Foreground/background pair for anything classified into a visual tier.
pub trait ToneColor {
    fn color(&self) -> Color32;
    fn background(&self) -> Color32;
}

impl ToneColor for Direction {
    fn color(&self) -> Color32 {
        match self {
            Self::Positive => UI_CONFIG.colors.favorable,
            Self::Negative => UI_CONFIG.colors.adverse,
        }
    }

    fn background(&self) -> Color32 {
        match self {
            Self::Positive => UI_CONFIG.colors.favorable_bg,
            Self::Negative => UI_CONFIG.colors.adverse_bg,
        }
    }
}

impl ToneColor for ReliabilityTier {
    fn color(&self) -> Color32 {
        match self {
            Self::High => UI_CONFIG.colors.favorable,
            Self::Moderate => UI_CONFIG.colors.caution,
            Self::Low => UI_CONFIG.colors.adverse,
        }
    }

    fn background(&self) -> Color32 {
        match self {
            Self::High => UI_CONFIG.colors.favorable_bg,
            Self::Moderate => UI_CONFIG.colors.caution_bg,
            Self::Low => UI_CONFIG.colors.adverse_bg,
        }
    }
}

// Inverted sense: inflationary contribution is the warning colour.
impl ToneColor for ContributionTier {
    fn color(&self) -> Color32 {
        match self {
            Self::Warning => UI_CONFIG.colors.adverse,
            Self::Favorable => UI_CONFIG.colors.favorable,
        }
    }

    fn background(&self) -> Color32 {
        match self {
            Self::Warning => UI_CONFIG.colors.adverse_bg,
            Self::Favorable => UI_CONFIG.colors.favorable_bg,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, size: f32);
    fn badge(&mut self, text: &str, tone: &dyn ToneColor, size: f32);
    fn bullet(&mut self, text: &str, size: f32);
    /// Subdued caption above a value, as used in the compact cards.
    fn metric(&mut self, label: &str, value: RichText);
    fn reliability_bar(&mut self, reliability: f64, tier: ReliabilityTier, width: f32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, size: f32) {
        self.label(
            RichText::new(text)
                .size(size)
                .color(UI_CONFIG.colors.subdued),
        );
    }

    fn badge(&mut self, text: &str, tone: &dyn ToneColor, size: f32) {
        Frame::new()
            .fill(tone.background())
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::symmetric(8, 3))
            .show(self, |ui| {
                ui.label(RichText::new(text).size(size).color(tone.color()));
            });
    }

    fn bullet(&mut self, text: &str, size: f32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(
                RichText::new(UI_TEXT.icon_bullet)
                    .size(size)
                    .color(UI_CONFIG.colors.subdued),
            );
            ui.label(RichText::new(text).size(size).color(UI_CONFIG.colors.label));
        });
    }

    fn metric(&mut self, label: &str, value: RichText) {
        self.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0; // Tight spacing
            ui.label_subdued(label, 12.0);
            ui.label(value);
        });
    }

    fn reliability_bar(&mut self, reliability: f64, tier: ReliabilityTier, width: f32) {
        self.scope(|ui| {
            ui.visuals_mut().extreme_bg_color = UI_CONFIG.colors.bar_track;
            ui.add(
                ProgressBar::new(reliability.clamp(0.0, 1.0) as f32)
                    .desired_width(width)
                    .desired_height(8.0)
                    .fill(tier.color())
                    .corner_radius(CornerRadius::same(4)),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_contribution_reads_opposite_to_direction() {
        assert_eq!(
            ContributionTier::Warning.color(),
            Direction::Negative.color()
        );
        assert_eq!(
            ContributionTier::Favorable.color(),
            Direction::Positive.color()
        );
        assert_eq!(
            ContributionTier::Warning.background(),
            Direction::Negative.background()
        );
    }

    #[test]
    fn reliability_tiers_are_distinguishable() {
        let high = ReliabilityTier::High.color();
        let moderate = ReliabilityTier::Moderate.color();
        let low = ReliabilityTier::Low.color();
        assert_ne!(high, moderate);
        assert_ne!(moderate, low);
        assert_ne!(high, low);
    }
}
