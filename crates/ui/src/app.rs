use std::sync::{Arc, Mutex};

use eframe::egui;
use folio_core::carousel::{Carousel, Nav};
use folio_core::model::{CareerEntry, Portfolio, Testimonial};
use folio_core::parsers::{self, Content};
use folio_core::rotator::Rotator;
use folio_core::skills::{CategoryFilter, SkillBrowser};
use folio_core::views::{self, Section};
use folio_protocol::{HitTarget, RenderCommand, ThemeToken, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Section state derived from one loaded snapshot.
pub(crate) struct Browser {
    portfolio: Portfolio,
    career: Carousel<CareerEntry>,
    skills: SkillBrowser,
    testimonials: Vec<Testimonial>,
    rotator: Rotator,
}

impl Browser {
    pub(crate) fn new(portfolio: Portfolio) -> Self {
        let testimonials = portfolio.approved_testimonials();
        Self {
            career: Carousel::career(portfolio.careers.clone()),
            skills: SkillBrowser::new(portfolio.skills.clone()),
            rotator: Rotator::new(testimonials.len()),
            testimonials,
            portfolio,
        }
    }

    /// Fold freshly loaded content in. A full snapshot rebuilds everything;
    /// a listing replaces its own section and leaves the others' navigation
    /// alone.
    pub(crate) fn apply(&mut self, content: Content) {
        match content {
            Content::Portfolio(snapshot) => *self = Self::new(*snapshot),
            Content::Careers(careers) => {
                self.career.replace_careers(careers.clone());
                self.portfolio.careers = careers;
            }
            Content::Skills(skills) => {
                self.skills.replace_skills(skills.clone());
                self.portfolio.skills = skills;
            }
            Content::Testimonials(testimonials) => {
                self.portfolio.testimonials = testimonials;
                self.testimonials = self.portfolio.approved_testimonials();
                self.rotator = self.rotator.resized(self.testimonials.len());
            }
            other => other.merge_into(&mut self.portfolio),
        }
    }

    pub(crate) fn render(&self, section: Section, viewport: &Viewport) -> Vec<RenderCommand> {
        match section {
            Section::Overview => views::render_overview(&self.portfolio, viewport),
            Section::Skills => views::render_skills(&self.skills, viewport),
            Section::CareerJourney => views::render_career_journey(&self.career, viewport),
            Section::Testimonials => {
                views::render_testimonials(&self.rotator, &self.testimonials, viewport)
            }
        }
    }

    /// Apply a click on `target` inside `section`. Returns whether anything
    /// changed.
    pub(crate) fn click(&mut self, section: Section, target: HitTarget) -> bool {
        match (section, target) {
            (Section::CareerJourney, HitTarget::StepPrevious) => {
                self.career.navigate(Nav::Previous)
            }
            (Section::CareerJourney, HitTarget::StepNext) => self.career.navigate(Nav::Next),
            (Section::CareerJourney, HitTarget::Dot(i)) => self.career.navigate(Nav::JumpTo(i)),
            (Section::Skills, HitTarget::Tab(i)) => CategoryFilter::from_index(i)
                .is_some_and(|filter| self.skills.set_filter(filter)),
            (Section::Skills, HitTarget::StepPrevious) => self.skills.navigate(Nav::Previous),
            (Section::Skills, HitTarget::StepNext) => self.skills.navigate(Nav::Next),
            (Section::Testimonials, HitTarget::StepPrevious) => {
                self.rotate(self.rotator.previous())
            }
            (Section::Testimonials, HitTarget::StepNext) => self.rotate(self.rotator.next()),
            (Section::Testimonials, HitTarget::Dot(i)) => self.rotate(self.rotator.select(i)),
            _ => false,
        }
    }

    fn rotate(&mut self, next: Rotator) -> bool {
        let changed = next != self.rotator;
        self.rotator = next;
        changed
    }

    fn status(&self) -> String {
        let state = self.career.state();
        let range = state.visible_range();
        format!(
            "Career: {}-{} of {} | Skills: {} ({}) | Testimonials: {}",
            range.start + usize::from(!state.is_empty()),
            range.end,
            state.len(),
            self.skills.filter().label(),
            self.skills.page_label(),
            self.testimonials.len(),
        )
    }
}

/// Main application state.
pub struct FolioApp {
    browser: Option<Browser>,
    theme_mode: ThemeMode,
    /// Error message to display.
    error: Option<String>,
    /// Snapshot bytes from an async load.
    pending_data: Arc<Mutex<Option<Vec<u8>>>>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme_mode = ThemeMode::Dark;
        cc.egui_ctx.set_visuals(theme_mode.visuals());
        theme::apply_typography(&cc.egui_ctx);

        let pending_data: Arc<Mutex<Option<Vec<u8>>>> = Arc::new(Mutex::new(None));

        // On WASM, check URL hash for auto-load (e.g. #demo)
        #[cfg(target_arch = "wasm32")]
        {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if hash == "#demo" {
                let pd = pending_data.clone();
                let ctx = cc.egui_ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match Self::fetch_bytes("/assets/demo.json").await {
                        Ok(bytes) => {
                            tracing::info!(bytes = bytes.len(), "fetched demo snapshot");
                            if let Ok(mut lock) = pd.lock() {
                                *lock = Some(bytes);
                            }
                            ctx.request_repaint();
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("folio: fetch error: {e}").into());
                        }
                    }
                });
            }
        }

        Self {
            browser: None,
            theme_mode,
            error: None,
            pending_data,
        }
    }

    /// Start with a snapshot already loaded.
    pub fn with_content(cc: &eframe::CreationContext<'_>, data: &[u8]) -> Self {
        let mut app = Self::new(cc);
        app.load(data);
        app
    }

    /// Parse `data` and fold it into the current snapshot.
    fn load(&mut self, data: &[u8]) {
        match parsers::parse_auto(data) {
            Ok(content) => {
                tracing::info!(kind = content.kind(), bytes = data.len(), "loaded content");
                match self.browser.as_mut() {
                    Some(browser) => browser.apply(content),
                    None => self.browser = Some(Browser::new(content.into_portfolio())),
                }
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse content");
                self.error = Some(format!("Failed to parse content: {e}"));
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Content", &["json"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(data) => self.load(&data),
            Err(e) => self.error = Some(format!("Failed to read {}: {e}", path.display())),
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| format!("{e:?}"))?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "not a Response")?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        let buf = JsFuture::from(resp.array_buffer().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buf).to_vec())
    }

    fn sections(&mut self, ui: &mut egui::Ui) {
        let Some(browser) = &self.browser else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading("Drop a content snapshot here or click Open");
                    ui.label("Accepts a full snapshot or a single admin listing (careers, skills, projects, testimonials)");
                });
            });
            return;
        };

        let mut clicked: Option<(Section, HitTarget)> = None;
        let mut hovering_target = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for section in Section::ALL {
                let width = ui.available_width();
                let viewport = Viewport::sized(f64::from(width), f64::INFINITY);
                let commands = browser.render(section, &viewport);
                let height = views::content_height(&commands, 0.0) as f32;

                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
                if !ui.is_rect_visible(rect) {
                    continue;
                }
                let mut painter = ui.painter_at(rect);
                painter.rect_filled(
                    rect,
                    egui::CornerRadius::ZERO,
                    theme::resolve(ThemeToken::Background, self.theme_mode),
                );
                let result =
                    renderer::render_commands(&mut painter, &commands, rect.min, self.theme_mode);

                if let Some(pos) = response.hover_pos() {
                    hovering_target |= result.hit(pos).is_some();
                }
                if response.clicked() {
                    if let Some(target) = response.interact_pointer_pos().and_then(|p| result.hit(p)) {
                        clicked = Some((section, target));
                    }
                }
                ui.add_space(8.0);
            }
        });

        if hovering_target {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if let (Some((section, target)), Some(browser)) = (clicked, self.browser.as_mut()) {
            if browser.click(section, target) {
                tracing::debug!(section = section.name(), ?target, "navigated");
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pending = {
            let mut lock = self.pending_data.lock().unwrap_or_else(|e| e.into_inner());
            lock.take()
        };
        if let Some(data) = pending {
            self.load(&data);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("folio");
                ui.separator();

                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("Open").clicked() {
                    self.open_dialog();
                }

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "Dark",
                    ThemeMode::Light => "Light",
                };
                if ui.button(theme_label).clicked() {
                    self.theme_mode = self.theme_mode.toggled();
                    ctx.set_visuals(self.theme_mode.visuals());
                }

                if let Some(hero) = self.browser.as_ref().and_then(|b| b.portfolio.hero.as_ref()) {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(hero.name.as_str());
                    });
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                } else if let Some(browser) = &self.browser {
                    ui.label(browser.status());
                } else {
                    ui.label("No content loaded");
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.sections(ui));

        let dropped = ctx.input(|i| {
            i.raw.dropped_files.first().and_then(|file| {
                file.bytes
                    .as_ref()
                    .map(|bytes| bytes.to_vec())
                    .or_else(|| file.path.as_ref().and_then(|p| std::fs::read(p).ok()))
            })
        });
        if let Some(data) = dropped {
            self.load(&data);
        }
    }
}
