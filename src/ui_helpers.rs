use eframe::egui::{self, Color32, RichText, Ui};

/// Shared palette derived from the current theme flag.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub is_dark: bool,
    pub card_fill: Color32,
    pub chip_fill: Color32,
    pub text_strong: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
}

impl Palette {
    pub fn from_theme(is_dark: bool) -> Self {
        if is_dark {
            Self {
                is_dark,
                card_fill: Color32::from_rgb(30, 41, 59),
                chip_fill: Color32::from_rgb(51, 65, 85),
                text_strong: Color32::WHITE,
                text_muted: Color32::from_rgb(148, 163, 184),
                accent: Color32::from_rgb(59, 130, 246),
            }
        } else {
            Self {
                is_dark,
                card_fill: Color32::WHITE,
                chip_fill: Color32::from_rgb(229, 231, 235),
                text_strong: Color32::from_rgb(17, 24, 39),
                text_muted: Color32::from_rgb(107, 114, 128),
                accent: Color32::from_rgb(37, 99, 235),
            }
        }
    }
}

/// Small filled badge, e.g. NEW / LEAVING SOON flags on a card.
pub fn render_badge(ui: &mut Ui, text: &str, fill: Color32) {
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::symmetric(5.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(10.0).strong().color(Color32::WHITE));
        });
}

/// Rounded pill used for genres and tech tags.
pub fn render_chip(ui: &mut Ui, text: &str, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.chip_fill)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(palette.text_muted));
        });
}

/// Green "match" chip shown next to content metadata.
pub fn render_match_chip(ui: &mut Ui, rating: &str) {
    egui::Frame::none()
        .fill(Color32::from_rgb(22, 163, 74))
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} Match", rating))
                    .size(11.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

/// Maturity-rating label in a thin outline box.
pub fn render_maturity_tag(ui: &mut Ui, rating: &str, palette: &Palette) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, palette.text_muted))
        .rounding(egui::Rounding::same(3.0))
        .inner_margin(egui::Margin::symmetric(5.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(rating).size(11.0).color(palette.text_muted));
        });
}

/// Flat rectangle standing in for an image that hasn't arrived yet (or
/// never will: load failures fall back here with no retry).
pub fn paint_placeholder(ui: &Ui, rect: egui::Rect, palette: &Palette) {
    let fill = if palette.is_dark {
        Color32::from_rgb(51, 65, 85)
    } else {
        Color32::from_rgb(229, 231, 235)
    };
    ui.painter().rect_filled(rect, egui::Rounding::same(4.0), fill);
}

/// Circular profile avatar with the glyph centered.
pub fn render_avatar(ui: &mut Ui, glyph: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    ui.painter()
        .circle_filled(rect.center(), size / 2.0, Color32::from_rgb(79, 70, 229));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(size * 0.5),
        Color32::WHITE,
    );
    response
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_text("a very long description", 10), "a very ...");
    }
}
