//! Hero banner over the featured content's backdrop image.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText, Ui};

use crate::app_state::Msg;
use crate::images::ImageManager;
use crate::models::Content;
use crate::timer::OneShot;
use crate::ui_helpers::{Palette, paint_placeholder, render_chip, render_match_chip, render_maturity_tag};

const HERO_HEIGHT: f32 = 380.0;

/// Delay before the banner swaps from the still frame to "preview playing".
const VIDEO_READY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Play,
    MoreInfo,
}

#[derive(Debug, Clone)]
pub struct HeroState {
    pub muted: bool,
    pub video_ready: bool,
    pub ready_timer: OneShot,
}

impl Default for HeroState {
    fn default() -> Self {
        let mut ready_timer = OneShot::default();
        ready_timer.start_in(VIDEO_READY_DELAY);
        Self {
            muted: true,
            video_ready: false,
            ready_timer,
        }
    }
}

impl HeroState {
    /// Poll the simulated-load timer. The timer dies with this state, so a
    /// torn-down hero can never flip a stale flag.
    pub fn tick(&mut self, now: Instant) {
        if self.ready_timer.fired(now) {
            self.video_ready = true;
        }
    }
}

pub fn render_hero(
    ui: &mut Ui,
    content: &Content,
    state: &mut HeroState,
    images: &mut ImageManager,
    tx: &Sender<Msg>,
    palette: &Palette,
) -> Option<HeroAction> {
    let mut action = None;

    images.request(&content.background_image, tx, ui.ctx());

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HERO_HEIGHT),
        egui::Sense::hover(),
    );

    if let Some(texture) = images.texture(&content.background_image) {
        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    } else {
        paint_placeholder(ui, rect, palette);
    }

    // Legibility scrim over the backdrop; heavier until the preview is
    // "ready" to mimic the still-frame to playback swap.
    let scrim_alpha = if state.video_ready { 120 } else { 170 };
    ui.painter()
        .rect_filled(rect, 0.0, Color32::from_black_alpha(scrim_alpha));

    let text_color = Color32::WHITE;
    let inner = rect.shrink2(egui::vec2(32.0, 28.0));
    let mut content_ui = ui.child_ui(inner, egui::Layout::top_down(egui::Align::LEFT));
    let cui = &mut content_ui;

    cui.label(RichText::new(&content.title).size(36.0).strong().color(text_color));
    cui.add_space(8.0);

    cui.horizontal(|ui| {
        render_match_chip(ui, &content.rating);
        ui.label(RichText::new(content.year.to_string()).color(text_color));
        render_maturity_tag(ui, &content.maturity_rating, palette);
        ui.label(RichText::new(&content.duration).color(text_color));
    });
    cui.add_space(10.0);

    cui.set_max_width(inner.width() * 0.6);
    cui.label(RichText::new(&content.description).size(14.0).color(text_color));
    cui.add_space(14.0);

    cui.horizontal(|ui| {
        if ui
            .add(egui::Button::new(RichText::new("▶ Play").size(16.0).strong()))
            .clicked()
        {
            action = Some(HeroAction::Play);
        }
        if ui
            .add(egui::Button::new(RichText::new("ℹ More Info").size(16.0)))
            .clicked()
        {
            action = Some(HeroAction::MoreInfo);
        }
    });
    cui.add_space(12.0);

    cui.horizontal_wrapped(|ui| {
        for genre in &content.genre {
            render_chip(ui, genre, palette);
        }
    });

    // Mute toggle in the lower-right corner of the banner.
    let mute_rect = egui::Rect::from_center_size(
        egui::pos2(rect.right() - 36.0, rect.bottom() - 36.0),
        egui::vec2(32.0, 32.0),
    );
    let mut mute_ui = ui.child_ui(mute_rect, egui::Layout::centered_and_justified(egui::Direction::LeftToRight));
    let glyph = if state.muted { "🔇" } else { "🔊" };
    if mute_ui.add(egui::Button::new(glyph)).clicked() {
        state.muted = !state.muted;
    }

    if !state.video_ready {
        ui.put(
            egui::Rect::from_center_size(
                egui::pos2(rect.right() - 80.0, rect.top() + 24.0),
                egui::vec2(60.0, 20.0),
            ),
            egui::Spinner::new(),
        );
    }

    action
}
