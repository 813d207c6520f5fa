//! Top navigation bar for the browse UI.

use eframe::egui::{self, Color32, RichText, Ui};

use crate::models::UserProfile;
use crate::ui_helpers::{Palette, render_avatar};

const NAV_ITEMS: [&str; 7] = [
    "Home",
    "TV Shows",
    "Movies",
    "Games",
    "New & Popular",
    "My List",
    "Browse by Genre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ThemeToggled,
    ProfileClicked,
}

#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub search_open: bool,
    pub search_text: String,
}

pub fn render_nav(
    ui: &mut Ui,
    state: &mut NavState,
    current_profile: &UserProfile,
    palette: &Palette,
) -> Option<NavAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Marquee")
                .size(22.0)
                .strong()
                .color(palette.accent),
        );
        ui.add_space(16.0);

        for (index, item) in NAV_ITEMS.iter().enumerate() {
            // The first tab is the active one; the rest are presentational.
            let text = if index == 0 {
                RichText::new(*item).strong().color(palette.accent)
            } else {
                RichText::new(*item).color(palette.text_muted)
            };
            let _ = ui.add(egui::Button::new(text).frame(false));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if render_avatar(ui, &current_profile.avatar, 28.0).clicked() {
                action = Some(NavAction::ProfileClicked);
            }

            let theme_glyph = if palette.is_dark { "🌙" } else { "☀" };
            if ui.add(egui::Button::new(theme_glyph).frame(false)).clicked() {
                action = Some(NavAction::ThemeToggled);
            }

            let _ = ui.add(egui::Button::new("🔔").frame(false));

            if state.search_open {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.search_text)
                        .hint_text("Search titles, genres...")
                        .desired_width(200.0),
                );
                if response.lost_focus() && state.search_text.is_empty() {
                    state.search_open = false;
                }
            } else if ui.add(egui::Button::new("🔍").frame(false)).clicked() {
                state.search_open = true;
            }
        });
    });

    if current_profile.is_kids {
        ui.colored_label(Color32::from_rgb(234, 179, 8), "Kids profile");
    }

    action
}
