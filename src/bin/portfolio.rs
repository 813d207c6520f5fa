//! Single-page freelancer portfolio: scroll-spied section nav, static copy,
//! and a validated contact form.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use marquee::app_state::Msg;
use marquee::data::{PROJECTS, SERVICES, STATS};
use marquee::form::{FormSession, FormStatus};
use marquee::images::ImageManager;
use marquee::scroll_spy::{ScrollSpy, Section};
use marquee::ui_helpers::{Palette, paint_placeholder, render_chip};

const SECTION_IDS: [&str; 5] = ["hero", "about", "services", "portfolio", "contact"];

const PROFILE_PHOTO: &str =
    "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=400";

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    let viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 820.0]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "DevMaster — Portfolio",
        options,
        Box::new(|_cc| Box::new(Portfolio::new())),
    )
}

struct Portfolio {
    session: FormSession,

    spy: ScrollSpy,
    sections: Vec<Section>,
    pending_scroll: Option<f32>,
    menu_open: bool,

    images: ImageManager,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,

    theme_applied: bool,
}

impl Portfolio {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            session: FormSession::default(),
            spy: ScrollSpy::new("hero"),
            sections: Vec::new(),
            pending_scroll: None,
            menu_open: false,
            images: ImageManager::default(),
            tx,
            rx,
            theme_applied: false,
        }
    }

    fn scroll_to(&mut self, id: &str) {
        if let Some(section) = self.sections.iter().find(|s| s.id == id) {
            self.pending_scroll = Some(section.top);
        }
        self.menu_open = false;
    }

    fn nav_label(id: &str) -> &str {
        match id {
            "hero" => "Home",
            "about" => "About",
            "services" => "Services",
            "portfolio" => "Portfolio",
            "contact" => "Contact",
            other => other,
        }
    }
}

impl eframe::App for Portfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(msg) = self.rx.try_recv() {
            self.images.handle(msg, ctx);
        }

        self.session.tick(Instant::now());
        if self.session.reset_pending() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if !self.theme_applied {
            ctx.set_visuals(egui::Visuals::dark());
            self.theme_applied = true;
        }
        let palette = Palette::from_theme(true);

        egui::TopBottomPanel::top("portfolio_nav").show(ctx, |ui| {
            ui.add_space(6.0);
            let narrow = ui.available_width() < 700.0;
            let mut scroll_request = None;

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("DevMaster")
                        .size(20.0)
                        .strong()
                        .color(Color32::from_rgb(192, 132, 252)),
                );
                if narrow {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let glyph = if self.menu_open { "✕" } else { "☰" };
                        if ui.add(egui::Button::new(glyph).frame(false)).clicked() {
                            self.menu_open = !self.menu_open;
                        }
                    });
                } else {
                    ui.add_space(16.0);
                    for id in SECTION_IDS {
                        let active = self.spy.active() == id;
                        let text = if active {
                            RichText::new(Self::nav_label(id)).strong().color(palette.accent)
                        } else {
                            RichText::new(Self::nav_label(id)).color(palette.text_muted)
                        };
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            scroll_request = Some(id);
                        }
                    }
                }
            });

            if narrow && self.menu_open {
                for id in SECTION_IDS {
                    let active = self.spy.active() == id;
                    if ui
                        .selectable_label(active, Self::nav_label(id))
                        .clicked()
                    {
                        scroll_request = Some(id);
                    }
                }
            }
            ui.add_space(6.0);

            if let Some(id) = scroll_request {
                self.scroll_to(id);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().id_source("portfolio_page");
            if let Some(y) = self.pending_scroll.take() {
                area = area.vertical_scroll_offset(y);
            }

            let output = area.show(ui, |ui| {
                let content_top = ui.cursor().top();
                let mut measured: Vec<Section> = Vec::with_capacity(SECTION_IDS.len());

                measure_section(ui, content_top, "hero", &mut measured, |ui| {
                    self.render_hero(ui, &palette)
                });
                measure_section(ui, content_top, "about", &mut measured, |ui| {
                    self.render_about(ui, &palette)
                });
                measure_section(ui, content_top, "services", &mut measured, |ui| {
                    render_services(ui, &palette)
                });
                measure_section(ui, content_top, "portfolio", &mut measured, |ui| {
                    self.render_projects(ui, &palette)
                });
                measure_section(ui, content_top, "contact", &mut measured, |ui| {
                    self.render_contact(ui, &palette)
                });
                render_footer(ui, &palette);

                measured
            });

            self.sections = output.inner;
            // Every frame is a scroll event in an immediate-mode UI.
            self.spy.on_scroll(output.state.offset.y, &self.sections);
        });
    }
}

fn measure_section(
    ui: &mut Ui,
    content_top: f32,
    id: &'static str,
    measured: &mut Vec<Section>,
    body: impl FnOnce(&mut Ui),
) {
    let top = ui.cursor().top() - content_top;
    body(ui);
    let bottom = ui.cursor().top() - content_top;
    measured.push(Section::new(id, top, bottom - top));
}

impl Portfolio {
    fn render_hero(&mut self, ui: &mut Ui, palette: &Palette) {
        ui.add_space(70.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("● Available for freelance")
                    .size(13.0)
                    .color(Color32::from_rgb(74, 222, 128)),
            );
            ui.add_space(14.0);
            ui.label(
                RichText::new("Crafting Modern")
                    .size(44.0)
                    .strong()
                    .color(palette.text_strong),
            );
            ui.label(
                RichText::new("Digital Experiences")
                    .size(44.0)
                    .strong()
                    .color(Color32::from_rgb(192, 132, 252)),
            );
            ui.add_space(12.0);
            ui.label(
                RichText::new(
                    "Full-stack developer specializing in React, Angular, Node.js & Analytics",
                )
                .size(17.0)
                .color(palette.text_muted),
            );
            ui.add_space(18.0);
            ui.horizontal(|ui| {
                // Center the pair of call-to-action buttons by padding.
                let pad = (ui.available_width() - 280.0).max(0.0) / 2.0;
                ui.add_space(pad);
                if ui
                    .add(egui::Button::new(RichText::new("Start a Project").strong()))
                    .clicked()
                {
                    self.scroll_to("contact");
                }
                if ui.button("View My Work").clicked() {
                    self.scroll_to("portfolio");
                }
            });
            ui.add_space(30.0);

            // Stats strip.
            StripBuilder::new(ui)
                .sizes(Size::remainder(), STATS.len())
                .horizontal(|mut strip| {
                    for stat in STATS.iter() {
                        strip.cell(|ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(&stat.number)
                                        .size(26.0)
                                        .strong()
                                        .color(Color32::from_rgb(192, 132, 252)),
                                );
                                ui.label(
                                    RichText::new(&stat.label)
                                        .size(12.0)
                                        .color(palette.text_muted),
                                );
                            });
                        });
                    }
                });
        });
        ui.add_space(70.0);
    }

    fn render_about(&mut self, ui: &mut Ui, palette: &Palette) {
        section_heading(ui, "About Me", palette);

        self.images.request(PROFILE_PHOTO, &self.tx, ui.ctx());

        StripBuilder::new(ui)
            .size(Size::relative(0.35))
            .size(Size::remainder())
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width().min(280.0), 320.0),
                        egui::Sense::hover(),
                    );
                    if let Some(texture) = self.images.texture(PROFILE_PHOTO) {
                        ui.painter().image(
                            texture.id(),
                            rect,
                            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                            Color32::WHITE,
                        );
                    } else {
                        paint_placeholder(ui, rect, palette);
                    }
                });
                strip.cell(|ui| {
                    ui.label(
                        RichText::new("6+ Years of Digital Innovation")
                            .size(22.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(
                            "I'm a passionate full-stack developer who transforms ideas into \
                             powerful digital solutions. With over 6 years of experience, I \
                             specialize in creating modern, scalable applications that drive \
                             real business results.",
                        )
                        .color(palette.text_muted),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(
                            "My expertise spans the entire development lifecycle, from crafting \
                             pixel-perfect user interfaces to building robust backend systems \
                             and implementing advanced analytics that provide actionable \
                             insights.",
                        )
                        .color(palette.text_muted),
                    );
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        render_chip(ui, "React, Angular, Vue.js", palette);
                        render_chip(ui, "Node.js, Express, APIs", palette);
                    });
                });
            });
        ui.add_space(50.0);
    }

    fn render_projects(&mut self, ui: &mut Ui, palette: &Palette) {
        section_heading(ui, "Featured Projects", palette);
        ui.label(
            RichText::new("Recent projects showcasing my technical expertise and creative solutions")
                .color(palette.text_muted),
        );
        ui.add_space(14.0);

        StripBuilder::new(ui)
            .sizes(Size::remainder(), PROJECTS.len())
            .horizontal(|mut strip| {
                for project in PROJECTS.iter() {
                    strip.cell(|ui| {
                        self.images.request(&project.image, &self.tx, ui.ctx());
                        egui::Frame::none()
                            .fill(palette.card_fill)
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::same(10.0))
                            .show(ui, |ui| {
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(ui.available_width(), 140.0),
                                    egui::Sense::hover(),
                                );
                                if let Some(texture) = self.images.texture(&project.image) {
                                    ui.painter().image(
                                        texture.id(),
                                        rect,
                                        egui::Rect::from_min_max(
                                            egui::pos2(0.0, 0.0),
                                            egui::pos2(1.0, 1.0),
                                        ),
                                        Color32::WHITE,
                                    );
                                } else {
                                    paint_placeholder(ui, rect, palette);
                                }
                                ui.add_space(8.0);
                                ui.label(
                                    RichText::new(&project.title)
                                        .size(16.0)
                                        .strong()
                                        .color(palette.text_strong),
                                );
                                ui.label(
                                    RichText::new(&project.description)
                                        .size(12.0)
                                        .color(palette.text_muted),
                                );
                                ui.add_space(6.0);
                                ui.horizontal_wrapped(|ui| {
                                    for tech in &project.tech {
                                        render_chip(ui, tech, palette);
                                    }
                                });
                            });
                    });
                }
            });
        ui.add_space(50.0);
    }

    fn render_contact(&mut self, ui: &mut Ui, palette: &Palette) {
        section_heading(ui, "Let's Connect", palette);
        ui.label(
            RichText::new("Ready to bring your vision to life? Let's discuss your next project.")
                .color(palette.text_muted),
        );
        ui.add_space(14.0);

        StripBuilder::new(ui)
            .size(Size::relative(0.4))
            .size(Size::remainder())
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    ui.label(
                        RichText::new("Get in Touch")
                            .size(18.0)
                            .strong()
                            .color(palette.text_strong),
                    );
                    ui.add_space(10.0);
                    contact_line(ui, "✉ Email", "hello@devmaster.dev", palette);
                    contact_line(ui, "☎ Phone", "+1 (555) 123-4567", palette);
                    contact_line(ui, "📍 Location", "Available Worldwide (Remote)", palette);
                });
                strip.cell(|ui| {
                    if self.session.status == FormStatus::Success {
                        egui::Frame::none()
                            .fill(Color32::from_rgb(20, 83, 45))
                            .rounding(egui::Rounding::same(6.0))
                            .inner_margin(egui::Margin::same(8.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(
                                        "✔ Message sent successfully! I'll get back to you soon.",
                                    )
                                    .color(Color32::from_rgb(134, 239, 172)),
                                );
                            });
                        ui.add_space(8.0);
                    }

                    form_field(
                        ui,
                        "Name *",
                        "Your full name",
                        &mut self.session.form.name,
                        &mut self.session.errors.name,
                        false,
                        palette,
                    );
                    form_field(
                        ui,
                        "Email *",
                        "your.email@example.com",
                        &mut self.session.form.email,
                        &mut self.session.errors.email,
                        false,
                        palette,
                    );
                    form_field(
                        ui,
                        "Message *",
                        "Tell me about your project...",
                        &mut self.session.form.message,
                        &mut self.session.errors.message,
                        true,
                        palette,
                    );

                    ui.add_space(8.0);
                    if ui
                        .add(egui::Button::new(RichText::new("Send Message").strong()))
                        .clicked()
                    {
                        self.session.submit();
                    }
                });
            });
        ui.add_space(50.0);
    }
}

fn render_services(ui: &mut Ui, palette: &Palette) {
    section_heading(ui, "My Services", palette);
    ui.label(
        RichText::new("Comprehensive web development solutions tailored to your business needs")
            .color(palette.text_muted),
    );
    ui.add_space(14.0);

    // 2x2 grid of service cards.
    for pair in SERVICES.chunks(2) {
        ui.columns(2, |columns| {
            for (column, service) in columns.iter_mut().zip(pair) {
                egui::Frame::none()
                    .fill(palette.card_fill)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::same(14.0))
                    .show(column, |ui| {
                        ui.label(
                            RichText::new(&service.title)
                                .size(17.0)
                                .strong()
                                .color(palette.text_strong),
                        );
                        ui.add_space(4.0);
                        ui.label(RichText::new(&service.description).color(palette.text_muted));
                    });
            }
        });
        ui.add_space(10.0);
    }
    ui.add_space(40.0);
}

fn render_footer(ui: &mut Ui, palette: &Palette) {
    ui.separator();
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("DevMaster")
                .size(18.0)
                .strong()
                .color(Color32::from_rgb(192, 132, 252)),
        );
        ui.label(
            RichText::new("Crafting modern digital experiences with expertise & precision")
                .size(12.0)
                .color(palette.text_muted),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new("© 2024 DevMaster. All rights reserved.")
                .size(11.0)
                .color(palette.text_muted),
        );
    });
    ui.add_space(20.0);
}

fn section_heading(ui: &mut Ui, title: &str, palette: &Palette) {
    ui.add_space(20.0);
    ui.label(
        RichText::new(title)
            .size(30.0)
            .strong()
            .color(palette.text_strong),
    );
    ui.add_space(8.0);
}

fn contact_line(ui: &mut Ui, label: &str, value: &str, palette: &Palette) {
    ui.label(RichText::new(label).strong().color(palette.text_strong));
    ui.label(RichText::new(value).color(palette.text_muted));
    ui.add_space(8.0);
}

/// One labelled input. Editing a field clears only that field's error; the
/// other fields keep theirs until the next submit.
fn form_field(
    ui: &mut Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    error: &mut Option<String>,
    multiline: bool,
    palette: &Palette,
) {
    ui.label(RichText::new(label).size(13.0).color(palette.text_strong));
    let response = if multiline {
        ui.add(
            egui::TextEdit::multiline(value)
                .hint_text(hint)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        )
    } else {
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
    };
    if response.changed() {
        *error = None;
    }
    if let Some(message) = error {
        ui.colored_label(Color32::from_rgb(248, 113, 113), message.as_str());
    }
    ui.add_space(6.0);
}
