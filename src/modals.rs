//! Content-detail and profile-switcher modals. Backdrop click and the ✕
//! control are equivalent close actions.

use std::sync::mpsc::Sender;

use eframe::egui::{self, Color32, RichText};

use crate::app_state::Msg;
use crate::images::ImageManager;
use crate::models::{Content, UserProfile};
use crate::ui_helpers::{
    Palette, paint_placeholder, render_avatar, render_chip, render_match_chip,
    render_maturity_tag,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Select(usize),
    Close,
}

/// Dimmed full-screen backdrop; returns true when clicked.
fn render_backdrop(ctx: &egui::Context, id: &str, dim: bool) -> bool {
    let screen = ctx.screen_rect();
    let mut clicked = false;
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(screen.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            if dim {
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(180));
            }
            let response = ui.allocate_rect(screen, egui::Sense::click());
            clicked = response.clicked();
        });
    clicked
}

pub fn render_content_modal(
    ctx: &egui::Context,
    content: &Content,
    images: &mut ImageManager,
    tx: &Sender<Msg>,
    palette: &Palette,
) -> Option<ModalAction> {
    let mut action = None;

    if render_backdrop(ctx, "content_modal_backdrop", true) {
        action = Some(ModalAction::Close);
    }

    images.request(&content.background_image, tx, ctx);

    egui::Window::new("content_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([620.0, 520.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(palette.card_fill)
                .rounding(egui::Rounding::same(10.0)),
        )
        .show(ctx, |ui| {
            // Header image with close button.
            let (header_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 240.0),
                egui::Sense::hover(),
            );
            if let Some(texture) = images.texture(&content.background_image) {
                ui.painter().image(
                    texture.id(),
                    header_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            } else {
                paint_placeholder(ui, header_rect, palette);
            }

            let close_rect = egui::Rect::from_center_size(
                egui::pos2(header_rect.right() - 22.0, header_rect.top() + 22.0),
                egui::vec2(26.0, 26.0),
            );
            let mut close_ui = ui.child_ui(
                close_rect,
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
            );
            if close_ui.add(egui::Button::new("✕")).clicked() {
                action = Some(ModalAction::Close);
            }

            ui.add_space(10.0);
            ui.label(
                RichText::new(&content.title)
                    .size(26.0)
                    .strong()
                    .color(palette.text_strong),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                render_match_chip(ui, &content.rating);
                ui.label(RichText::new(content.year.to_string()).color(palette.text_muted));
                render_maturity_tag(ui, &content.maturity_rating, palette);
                ui.label(RichText::new(&content.duration).color(palette.text_muted));
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new(RichText::new("▶ Play").strong()))
                    .clicked()
                {
                    action = Some(ModalAction::Play);
                }
                let _ = ui.button("+");
                let _ = ui.button("👍");
                let _ = ui.button("👎");
            });
            ui.add_space(10.0);

            egui::ScrollArea::vertical()
                .id_source("content_modal_body")
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("Synopsis")
                            .size(16.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.label(RichText::new(&content.description).color(palette.text_muted));
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new("Genres")
                            .size(14.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.horizontal_wrapped(|ui| {
                        for genre in &content.genre {
                            render_chip(ui, genre, palette);
                        }
                    });
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new("Cast")
                            .size(14.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    for actor in &content.cast {
                        ui.label(RichText::new(actor).size(12.0).color(palette.text_muted));
                    }
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new("Director")
                            .size(14.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.label(
                        RichText::new(&content.director)
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new("Language")
                            .size(14.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.label(
                        RichText::new(&content.language)
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                    ui.add_space(8.0);

                    ui.label(
                        RichText::new("Rating")
                            .size(14.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.label(
                        RichText::new(&content.maturity_rating)
                            .size(12.0)
                            .color(palette.text_muted),
                    );
                });
        });

    action
}

pub fn render_profile_modal(
    ctx: &egui::Context,
    profiles: &[UserProfile],
    current: usize,
    palette: &Palette,
) -> Option<ProfileAction> {
    let mut action = None;

    // The switcher's backdrop is invisible but still closes on click.
    if render_backdrop(ctx, "profile_modal_backdrop", false) {
        action = Some(ProfileAction::Close);
    }

    egui::Window::new("profile_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 64.0])
        .fixed_size([280.0, 0.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(palette.card_fill)
                .rounding(egui::Rounding::same(8.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Switch Profile")
                        .size(16.0)
                        .strong()
                        .color(palette.text_strong),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                        action = Some(ProfileAction::Close);
                    }
                });
            });
            ui.separator();

            for (index, profile) in profiles.iter().enumerate() {
                let selected = index == current;
                ui.horizontal(|ui| {
                    if render_avatar(ui, &profile.avatar, 32.0).clicked() {
                        action = Some(ProfileAction::Select(index));
                    }
                    let name = if selected {
                        RichText::new(&profile.name).strong().color(palette.accent)
                    } else {
                        RichText::new(&profile.name).color(palette.text_strong)
                    };
                    let response = ui.selectable_label(selected, name);
                    if profile.is_kids {
                        ui.label(RichText::new("Kids Profile").size(10.0).color(palette.text_muted));
                    }
                    if response.clicked() {
                        action = Some(ProfileAction::Select(index));
                    }
                });
            }

            ui.separator();
            let _ = ui.button("Manage Profiles");
            let _ = ui.button("Account Settings");
            let _ = ui.button("Sign Out");
        });

    action
}
