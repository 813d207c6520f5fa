//! Content cards and the horizontally scrolling category rows.

use std::sync::mpsc::Sender;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::app_state::Msg;
use crate::carousel::{Carousel, ScrollDirection};
use crate::images::ImageManager;
use crate::models::{Category, Content};
use crate::ui_helpers::{
    Palette, paint_placeholder, render_badge, render_chip, render_match_chip,
    render_maturity_tag, truncate_text,
};

const CARD_WIDTH: f32 = 260.0;
const THUMB_HEIGHT: f32 = 146.0;

/// One card. Returns true when the card body was clicked (opens the modal).
pub fn render_content_card(
    ui: &mut Ui,
    row_id: &str,
    content: &Content,
    images: &mut ImageManager,
    tx: &Sender<Msg>,
    palette: &Palette,
) -> bool {
    images.request(&content.thumbnail, tx, ui.ctx());

    let frame = egui::Frame::none()
        .fill(palette.card_fill)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(0.0))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                let (thumb_rect, _) = ui.allocate_exact_size(
                    egui::vec2(CARD_WIDTH, THUMB_HEIGHT),
                    egui::Sense::hover(),
                );
                if let Some(texture) = images.texture(&content.thumbnail) {
                    ui.painter().image(
                        texture.id(),
                        thumb_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                } else {
                    // Covers both "still loading" and "failed, no retry".
                    paint_placeholder(ui, thumb_rect, palette);
                }

                // Flag badges stacked in the top-left corner.
                let badge_origin = thumb_rect.min + egui::vec2(8.0, 8.0);
                let badge_rect =
                    egui::Rect::from_min_size(badge_origin, egui::vec2(140.0, THUMB_HEIGHT));
                let mut badge_ui =
                    ui.child_ui(badge_rect, egui::Layout::top_down(egui::Align::LEFT));
                if content.is_new {
                    render_badge(&mut badge_ui, "NEW", Color32::from_rgb(220, 38, 38));
                }
                if content.has_new_episode {
                    render_badge(&mut badge_ui, "NEW EPISODE", Color32::from_rgb(37, 99, 235));
                }
                if content.is_leaving {
                    render_badge(&mut badge_ui, "LEAVING SOON", Color32::from_rgb(234, 88, 12));
                }

                // Hover play overlay.
                if ui.rect_contains_pointer(thumb_rect) {
                    ui.painter()
                        .rect_filled(thumb_rect, 0.0, Color32::from_black_alpha(100));
                    ui.painter().circle_filled(
                        thumb_rect.center(),
                        20.0,
                        Color32::from_white_alpha(230),
                    );
                    ui.painter().text(
                        thumb_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "▶",
                        egui::FontId::proportional(18.0),
                        Color32::BLACK,
                    );
                }

                egui::Frame::none()
                    .inner_margin(egui::Margin::same(10.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(truncate_text(&content.title, 28))
                                .size(15.0)
                                .strong()
                                .color(palette.text_strong),
                        );
                        ui.add_space(4.0);

                        ui.horizontal(|ui| {
                            render_match_chip(ui, &content.rating);
                            ui.label(
                                RichText::new(content.year.to_string())
                                    .size(11.0)
                                    .color(palette.text_muted),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    render_maturity_tag(ui, &content.maturity_rating, palette);
                                },
                            );
                        });
                        ui.add_space(4.0);

                        ui.label(
                            RichText::new(truncate_text(&content.description, 80))
                                .size(12.0)
                                .color(palette.text_muted),
                        );
                        ui.add_space(6.0);

                        ui.horizontal_wrapped(|ui| {
                            for genre in content.genre.iter().take(3) {
                                render_chip(ui, genre, palette);
                            }
                        });
                        ui.add_space(6.0);

                        ui.horizontal(|ui| {
                            let _ = ui.small_button("▶");
                            let _ = ui.small_button("+");
                            let _ = ui.small_button("👍");
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new(&content.duration)
                                            .size(11.0)
                                            .color(palette.text_muted),
                                    );
                                },
                            );
                        });
                    });
            });
        });

    ui.interact(
        frame.response.rect,
        egui::Id::new(("card", row_id, &content.id)),
        egui::Sense::click(),
    )
    .clicked()
}

/// One category row: heading, nudge controls, and the scrollable strip.
/// Returns the content clicked this frame, if any.
pub fn render_category_row(
    ui: &mut Ui,
    category: &Category,
    carousel: &mut Carousel,
    images: &mut ImageManager,
    tx: &Sender<Msg>,
    palette: &Palette,
) -> Option<Content> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&category.name)
                .size(20.0)
                .strong()
                .color(palette.text_strong),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(carousel.can_scroll_right, egui::Button::new("▶"))
                .clicked()
            {
                carousel.nudge(ScrollDirection::Right);
            }
            if ui
                .add_enabled(carousel.can_scroll_left, egui::Button::new("◀"))
                .clicked()
            {
                carousel.nudge(ScrollDirection::Left);
            }
        });
    });
    ui.add_space(6.0);

    let mut area = egui::ScrollArea::horizontal()
        .id_source(&category.id)
        .auto_shrink([false, true]);
    if let Some(target) = carousel.take_target() {
        // The scroll surface clamps the target to its own bounds.
        area = area.horizontal_scroll_offset(target);
    }

    let output = area.show(ui, |ui| {
        ui.horizontal(|ui| {
            for item in &category.content {
                if render_content_card(ui, &category.id, item, images, tx, palette) {
                    clicked = Some(item.clone());
                }
            }
        });
    });

    carousel.on_scroll(
        output.state.offset.x,
        output.content_size.x,
        output.inner_rect.width(),
    );

    ui.add_space(18.0);
    clicked
}
