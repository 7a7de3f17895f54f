//! Support-contact card shown at the bottom of the dashboard sidebar.

use egui::{Button, Frame, Margin, RichText, Stroke, Ui};
use payops_business::SupportAction;

use crate::utils::colors::{COLOR_CARD_GRAY, COLOR_SKY};

pub const SUPPORT_LABEL: &str = "💬 Support";
pub const CALL_US_LABEL: &str = "📞 Call Us";

/// Renders the card. Returns the action the user picked, if any.
///
/// `phone` is shown beneath the buttons once `show_phone` is set.
pub fn support_center(ui: &mut Ui, phone: Option<&str>, show_phone: bool) -> Option<SupportAction> {
    let mut action = None;
    let text_color = egui::Color32::from_rgb(31, 41, 55);

    Frame::NONE
        .fill(COLOR_CARD_GRAY)
        .corner_radius(12.0)
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.vertical_centered_justified(|ui| {
                ui.label(RichText::new("🎧").size(22.0).color(text_color));
                ui.label(
                    RichText::new("Have any problems or have suggestion?")
                        .small()
                        .color(text_color),
                );
                ui.add_space(6.0);

                let support = Button::new(RichText::new(SUPPORT_LABEL).color(text_color))
                    .fill(egui::Color32::WHITE)
                    .stroke(Stroke::new(1.0, egui::Color32::from_rgb(209, 213, 219)));
                if ui.add(support).clicked() {
                    action = Some(SupportAction::OpenTickets);
                }

                let call = Button::new(RichText::new(CALL_US_LABEL).color(egui::Color32::WHITE))
                    .fill(COLOR_SKY);
                if ui.add(call).clicked() {
                    action = Some(SupportAction::CallUs);
                }

                if show_phone {
                    ui.add_space(4.0);
                    let line = match phone {
                        Some(phone) => format!("Call us at {phone}"),
                        None => "Phone support is not available yet".to_owned(),
                    };
                    ui.label(RichText::new(line).small().color(text_color));
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[derive(Default)]
    struct CardState {
        show_phone: bool,
        actions: Vec<SupportAction>,
    }

    fn card_harness(phone: Option<&'static str>) -> Harness<'static, CardState> {
        Harness::new_ui_state(
            move |ui, state: &mut CardState| {
                if let Some(action) = support_center(ui, phone, state.show_phone) {
                    if action == SupportAction::CallUs {
                        state.show_phone = true;
                    }
                    state.actions.push(action);
                }
            },
            CardState::default(),
        )
    }

    #[test]
    fn test_shows_prompt_and_buttons() {
        let harness = card_harness(None);

        assert!(
            harness
                .query_by_label("Have any problems or have suggestion?")
                .is_some()
        );
        assert!(harness.query_by_label(SUPPORT_LABEL).is_some());
        assert!(harness.query_by_label(CALL_US_LABEL).is_some());
    }

    #[test]
    fn test_support_button_opens_tickets() {
        let mut harness = card_harness(None);

        harness.get_by_label(SUPPORT_LABEL).click();
        harness.run();

        assert_eq!(harness.state().actions, vec![SupportAction::OpenTickets]);
    }

    #[test]
    fn test_call_us_reveals_phone() {
        let mut harness = card_harness(Some("+1 555 0100"));
        assert!(harness.query_by_label_contains("+1 555 0100").is_none());

        harness.get_by_label(CALL_US_LABEL).click();
        harness.run();

        assert_eq!(harness.state().actions, vec![SupportAction::CallUs]);
        assert!(harness.query_by_label("Call us at +1 555 0100").is_some());
    }
}
