//! Streaming-media browse UI: hero banner, category carousels, content and
//! profile modals. All data is hard-coded and read-only for the session.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui;

use marquee::app_state::Msg;
use marquee::cards::render_category_row;
use marquee::carousel::Carousel;
use marquee::config::{read_config, save_config};
use marquee::data::{CATEGORIES, FEATURED, PROFILES};
use marquee::hero::{HeroAction, HeroState, render_hero};
use marquee::images::ImageManager;
use marquee::logger::log_line;
use marquee::modals::{ModalAction, ProfileAction, render_content_modal, render_profile_modal};
use marquee::models::{Category, Config, Content, UserProfile};
use marquee::nav::{NavAction, NavState, render_nav};
use marquee::ui_helpers::Palette;

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    let viewport = egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Marquee",
        options,
        Box::new(|_cc| Box::new(Marquee::new())),
    )
}

struct Marquee {
    config: Config,
    catalog: Vec<Category>,
    featured: Content,
    profiles: Vec<UserProfile>,

    // Single-writer session state.
    current_profile: usize,
    selected: Option<Content>,
    profile_modal_open: bool,

    nav: NavState,
    hero: HeroState,
    carousels: HashMap<String, Carousel>,

    images: ImageManager,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,

    theme_applied: bool,
    font_scale_applied: bool,
}

impl Marquee {
    fn new() -> Self {
        let config = read_config();
        let catalog = CATEGORIES.clone();
        let carousels = catalog
            .iter()
            .map(|cat| (cat.id.clone(), Carousel::default()))
            .collect();
        let current_profile = config.active_profile_index.min(PROFILES.len() - 1);
        let (tx, rx) = mpsc::channel();

        Self {
            config,
            catalog,
            featured: FEATURED.clone(),
            profiles: PROFILES.clone(),
            current_profile,
            selected: None,
            profile_modal_open: false,
            nav: NavState::default(),
            hero: HeroState::default(),
            carousels,
            images: ImageManager::default(),
            tx,
            rx,
            theme_applied: false,
            font_scale_applied: false,
        }
    }

    fn is_dark(&self) -> bool {
        self.config.theme != "light"
    }

    fn toggle_theme(&mut self) {
        self.config.theme = if self.is_dark() { "light" } else { "dark" }.to_string();
        self.theme_applied = false;
        if let Err(e) = save_config(&self.config) {
            log_line(&format!("failed to save config: {}", e));
        }
    }

    fn play(&self, content: &Content) {
        match &content.trailer_url {
            Some(url) => {
                if let Err(e) = webbrowser::open(url) {
                    log_line(&format!("failed to open trailer {}: {}", url, e));
                }
            }
            None => log_line(&format!("play requested for {} (no trailer)", content.id)),
        }
    }
}

impl eframe::App for Marquee {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain background image results first so this frame renders them.
        while let Ok(msg) = self.rx.try_recv() {
            self.images.handle(msg, ctx);
        }

        self.hero.tick(Instant::now());
        if self.hero.ready_timer.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        if !self.theme_applied {
            if self.is_dark() {
                ctx.set_visuals(egui::Visuals::dark());
            } else {
                ctx.set_visuals(egui::Visuals::light());
            }
            self.theme_applied = true;
        }
        if !self.font_scale_applied {
            let mut style = egui::Style::default();
            let scale = self.config.font_scale.clamp(0.6, 2.0);
            style.text_styles.iter_mut().for_each(|(_, ts)| {
                ts.size *= scale;
            });
            ctx.set_style(style);
            self.font_scale_applied = true;
        }

        let palette = Palette::from_theme(self.is_dark());

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(6.0);
            let action = render_nav(ui, &mut self.nav, &self.profiles[self.current_profile], &palette);
            ui.add_space(6.0);
            match action {
                Some(NavAction::ThemeToggled) => self.toggle_theme(),
                Some(NavAction::ProfileClicked) => self.profile_modal_open = true,
                None => {}
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("browse_page")
                .show(ui, |ui| {
                    let featured = self.featured.clone();
                    match render_hero(
                        ui,
                        &featured,
                        &mut self.hero,
                        &mut self.images,
                        &self.tx,
                        &palette,
                    ) {
                        Some(HeroAction::Play) => self.play(&featured),
                        Some(HeroAction::MoreInfo) => self.selected = Some(featured.clone()),
                        None => {}
                    }
                    ui.add_space(18.0);

                    let catalog = self.catalog.clone();
                    for category in &catalog {
                        let carousel = self
                            .carousels
                            .entry(category.id.clone())
                            .or_default();
                        if let Some(clicked) = render_category_row(
                            ui,
                            category,
                            carousel,
                            &mut self.images,
                            &self.tx,
                            &palette,
                        ) {
                            self.selected = Some(clicked);
                        }
                    }
                });
        });

        if let Some(content) = self.selected.clone() {
            match render_content_modal(ctx, &content, &mut self.images, &self.tx, &palette) {
                Some(ModalAction::Close) => self.selected = None,
                Some(ModalAction::Play) => {
                    self.play(&content);
                    self.selected = None;
                }
                None => {}
            }
        }

        if self.profile_modal_open {
            match render_profile_modal(ctx, &self.profiles, self.current_profile, &palette) {
                // Selecting switches the profile and closes the switcher in
                // the same update.
                Some(ProfileAction::Select(index)) => {
                    self.current_profile = index;
                    self.profile_modal_open = false;
                }
                Some(ProfileAction::Close) => self.profile_modal_open = false,
                None => {}
            }
        }
    }
}
