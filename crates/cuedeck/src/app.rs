use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::nav::fragment;
use crate::nav::input::controls::{ControlButton, ControlsPanel};
use crate::nav::input::keyboard::{Key, KeyEvent, KeyboardAdapter, TargetProfile};
use crate::nav::input::touch::SwipeTracker;
use crate::nav::intent::Intent;
use crate::nav::router::ViewMode;
use crate::nav::state::{Navigator, NavigatorOptions};
use crate::parser;
use crate::render;
use crate::theme::Theme;
use crate::watch::DeckWatcher;

const DEFAULT_SWIPE_THRESHOLD: f32 = 60.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct DeckApp {
    file_path: PathBuf,
    nav: Navigator,
    keyboard: KeyboardAdapter,
    swipe: SwipeTracker,
    panel: ControlsPanel,
    theme: Theme,
    toast: Option<Toast>,
    last_ctrl_c: Option<Instant>,
    last_esc: Option<Instant>,
    watcher: Option<DeckWatcher>,
    /// Text typed into the go-to prompt, when the prompt is open.
    goto_prompt: Option<String>,
    hover_card: Option<usize>,
    frame_count: u32,
    fps: f32,
    fps_update: Instant,
}

impl DeckApp {
    fn new(
        file_path: PathBuf,
        nav: Navigator,
        theme: Theme,
        swipe: SwipeTracker,
        watcher: Option<DeckWatcher>,
    ) -> Self {
        let now = Instant::now();
        Self {
            file_path,
            nav,
            keyboard: KeyboardAdapter::new(),
            swipe,
            panel: ControlsPanel::new(),
            theme,
            toast: None,
            last_ctrl_c: None,
            last_esc: None,
            watcher,
            goto_prompt: None,
            hover_card: None,
            frame_count: 0,
            fps: 0.0,
            fps_update: now,
        }
    }

    fn display_title(&self) -> String {
        self.nav.deck().meta.title.clone().unwrap_or_else(|| {
            self.file_path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string()
        })
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update = Instant::now();
        }
    }

    fn check_reload(&mut self) {
        let changed = self.watcher.as_ref().is_some_and(|w| w.changed());
        if !changed {
            return;
        }
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => {
                let fresh = parser::parse(&content);
                if fresh.is_empty() {
                    log::warn!("reload: no slides in {}, keeping old deck", self.file_path.display());
                    return;
                }
                if let Some(name) = fresh.meta.theme.as_deref() {
                    if name != self.theme.name {
                        self.theme = Theme::from_name(name);
                    }
                }
                self.nav.reload(fresh);
                self.toast = Some(Toast::new("Reloaded".to_string()));
            }
            Err(e) => log::warn!("reload: could not read {}: {e}", self.file_path.display()),
        }
    }

    /// Keyboard handling for the go-to prompt. Returns true when the event
    /// stream was consumed by the prompt.
    fn handle_prompt_input(&mut self, i: &egui::InputState, intents: &mut Vec<Intent>) -> bool {
        let Some(mut buffer) = self.goto_prompt.take() else {
            return false;
        };

        for event in &i.events {
            match event {
                egui::Event::Text(text) => {
                    buffer.extend(text.chars().filter(|c| c.is_ascii_digit()));
                }
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => {
                    buffer.pop();
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => {
                    if let Some(intent) = self.panel.submit_go_to(&buffer) {
                        intents.push(intent);
                    }
                    return true;
                }
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => {
                    return true;
                }
                _ => {}
            }
        }
        self.goto_prompt = Some(buffer);
        true
    }

    fn collect_key_intents(&mut self, i: &egui::InputState, intents: &mut Vec<Intent>) {
        let bindings = [
            (egui::Key::ArrowRight, Key::ArrowRight),
            (egui::Key::ArrowLeft, Key::ArrowLeft),
            (egui::Key::Home, Key::Home),
            (egui::Key::End, Key::End),
            (egui::Key::Enter, Key::Enter),
            (egui::Key::Space, Key::Space),
            (egui::Key::N, Key::N),
            (egui::Key::P, Key::P),
            (egui::Key::G, Key::G),
            (egui::Key::F, Key::F),
            (egui::Key::H, Key::H),
            (egui::Key::K, Key::K),
        ];

        let target = TargetProfile {
            form_control: self.goto_prompt.is_some(),
            ..Default::default()
        };

        for (egui_key, key) in bindings {
            if i.key_pressed(egui_key) {
                let event = KeyEvent {
                    key,
                    alt: i.modifiers.alt,
                    target,
                };
                if let Some(intent) = self.keyboard.translate(&event) {
                    intents.push(intent);
                }
            }
        }
    }

    fn collect_swipe_intents(&mut self, i: &egui::InputState, intents: &mut Vec<Intent>) {
        if i.pointer.button_pressed(egui::PointerButton::Primary) {
            if let Some(pos) = i.pointer.press_origin() {
                self.swipe.start(pos.x);
            }
        }
        if i.pointer.button_down(egui::PointerButton::Primary) {
            if let Some(pos) = i.pointer.hover_pos() {
                if let Some(intent) = self.swipe.movement(pos.x) {
                    intents.push(intent);
                }
            }
        }
        if i.pointer.any_released() {
            self.swipe.end();
        }
    }

    fn control_buttons(&self) -> Vec<(ControlButton, &'static str, bool)> {
        let controls = self.nav.router().controls.as_ref();
        let (pres_enabled, over_enabled) = controls
            .map(|c| (c.presentation_button_enabled, c.overview_button_enabled))
            .unwrap_or((false, false));
        vec![
            (ControlButton::Start, "\u{23EE}", true),
            (ControlButton::Prev, "\u{25C0}", true),
            (ControlButton::Next, "\u{25B6}", true),
            (ControlButton::End, "\u{23ED}", true),
            (ControlButton::GoTo, "#", true),
            (ControlButton::ModePresentation, "Slides", pres_enabled),
            (ControlButton::ModeOverview, "Grid", over_enabled),
            (ControlButton::Fullscreen, "\u{26F6}", true),
        ]
    }

    fn control_button_rect(rect: egui::Rect, slot: usize, scale: f32) -> egui::Rect {
        let size = egui::vec2(64.0 * scale, 28.0 * scale);
        let gap = 8.0 * scale;
        let x = rect.left() + 16.0 * scale + slot as f32 * (size.x + gap);
        let y = rect.bottom() - 44.0 * scale;
        egui::Rect::from_min_size(egui::pos2(x, y), size)
    }

    /// Paint the controls row and hit-test clicks against it. Returns the
    /// pressed button, if any. The row only renders when the controls
    /// capability is wired and not hidden.
    fn draw_controls_row(
        &self,
        ui: &egui::Ui,
        ctx: &egui::Context,
        rect: egui::Rect,
        scale: f32,
    ) -> Option<ControlButton> {
        if self.nav.router().controls.is_none()
            || self.nav.router().presentation.controls_hidden()
        {
            return None;
        }

        let hover = ctx.input(|i| i.pointer.hover_pos());
        let clicked = ctx.input(|i| i.pointer.button_clicked(egui::PointerButton::Primary));
        let mut pressed = None;

        for (slot, (button, label, enabled)) in self.control_buttons().into_iter().enumerate() {
            let button_rect = Self::control_button_rect(rect, slot, scale);
            let hovered = hover.is_some_and(|p| button_rect.contains(p));

            let bg_opacity = if enabled && hovered { 0.9 } else { 0.6 };
            let fg_opacity = if enabled { 0.9 } else { 0.3 };
            ui.painter().rect_filled(
                button_rect,
                4.0 * scale,
                Theme::with_opacity(self.theme.code_background, bg_opacity),
            );
            let galley = ui.painter().layout_no_wrap(
                label.to_string(),
                egui::FontId::proportional(14.0 * scale),
                Theme::with_opacity(self.theme.foreground, fg_opacity),
            );
            let text_pos = button_rect.center() - galley.rect.size() / 2.0;
            ui.painter().galley(
                text_pos,
                galley,
                Theme::with_opacity(self.theme.foreground, fg_opacity),
            );

            if enabled && hovered && clicked {
                pressed = Some(button);
            }
        }
        pressed
    }

    fn draw_presentation(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let cursor = self.nav.cursor();
        let deck = self.nav.deck();
        if let Some(slide) = deck.slides.get(cursor.index - 1) {
            let active = (cursor.step > 0).then_some(cursor.step);
            render::render_slide(ui, slide, &self.theme, rect, cursor.step, active, 1.0, scale);
        }

        // Media strip for slides that carry a channel
        if let Some(channel) = self.nav.media().channel(cursor.index) {
            let status = match channel.status() {
                crate::nav::media::MediaStatus::Idle => "\u{25A0}",
                crate::nav::media::MediaStatus::Playing => "\u{25B6}",
                crate::nav::media::MediaStatus::Paused => "\u{2016}",
            };
            let strip_text = format!("{status} {}", channel.source);
            let strip_color = Theme::with_opacity(self.theme.accent, 0.7);
            let galley = ui.painter().layout_no_wrap(
                strip_text,
                egui::FontId::monospace(16.0 * scale),
                strip_color,
            );
            let pos = egui::pos2(rect.left() + 16.0 * scale, rect.bottom() - 60.0 * scale);
            ui.painter().galley(pos, galley, strip_color);
        }

        // Slide counter
        let counter_text = format!("{} / {}", cursor.index, deck.len());
        let counter_color = Theme::with_opacity(self.theme.foreground, 0.3);
        let counter_galley = ui.painter().layout_no_wrap(
            counter_text,
            egui::FontId::monospace(14.0 * scale),
            counter_color,
        );
        let counter_pos = egui::pos2(
            rect.right() - counter_galley.rect.width() - 16.0 * scale,
            rect.bottom() - 30.0 * scale,
        );
        ui.painter()
            .galley(counter_pos, counter_galley, counter_color);
    }

    /// Paint the overview grid; hit-testing happens against the same cell
    /// rects. Returns the ordinal of a clicked card.
    fn draw_overview(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        rect: egui::Rect,
        scale: f32,
    ) -> Option<usize> {
        let Some(overview) = self.nav.router().overview.as_ref() else {
            return None;
        };
        let cards = overview.cards();
        let count = cards.len();
        let current = overview.current().unwrap_or(self.nav.cursor().index);

        let hover = ctx.input(|i| i.pointer.hover_pos());
        let clicked = ctx.input(|i| i.pointer.button_clicked(egui::PointerButton::Primary));

        self.hover_card = None;
        let mut selected = None;

        // Title
        let padding = 24.0 * scale;
        let title_color = Theme::with_opacity(self.theme.heading_color, 0.9);
        let title_galley = ui.painter().layout_no_wrap(
            self.display_title(),
            egui::FontId::proportional(24.0 * scale),
            title_color,
        );
        ui.painter().galley(
            egui::pos2(rect.left() + padding, rect.top() + padding),
            title_galley,
            title_color,
        );

        for (i, card) in cards.iter().enumerate() {
            let cell_rect = render::grid_cell_rect(count, i, rect, scale);
            let hovered = hover.is_some_and(|p| cell_rect.contains(p));
            if hovered {
                self.hover_card = Some(card.ordinal);
                if clicked {
                    selected = Some(card.ordinal);
                }
            }
            render::render_card(
                ui,
                card,
                &self.theme,
                cell_rect,
                card.ordinal == current,
                hovered,
                scale,
            );
        }
        selected
    }

    fn draw_toast(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let Some(ref toast) = self.toast else { return };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(self.theme.code_background, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(20.0 * scale),
            toast_color,
        );
        let padding = 16.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - 80.0 * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
        ui.painter().galley(text_pos, galley, toast_color);
        ctx.request_repaint();
    }

    fn draw_goto_prompt(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let Some(ref buffer) = self.goto_prompt else {
            return;
        };
        let bg = Theme::with_opacity(self.theme.code_background, 0.95);
        let text_color = Theme::with_opacity(self.theme.foreground, 0.95);

        let prompt_text = format!("Go to slide: {buffer}\u{2588}");
        let galley = ui.painter().layout_no_wrap(
            prompt_text,
            egui::FontId::monospace(20.0 * scale),
            text_color,
        );
        let padding = 20.0 * scale;
        let prompt_rect = egui::Rect::from_center_size(
            rect.center(),
            galley.rect.size() + egui::vec2(padding * 2.0, padding * 2.0),
        );
        ui.painter().rect_filled(prompt_rect, 8.0 * scale, bg);
        ui.painter().galley(
            prompt_rect.min + egui::vec2(padding, padding),
            galley,
            text_color,
        );
    }

    fn draw_hud(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let cursor = self.nav.cursor();
        let count = self.nav.deck().incremental_count(cursor.index);
        let lines = [
            format!("slide   {} / {}", cursor.index, self.nav.deck().len()),
            format!("step    {} / {}", cursor.step, count),
            format!("frag    {}", self.nav.location().fragment().unwrap_or("-")),
            format!("mode    {}", self.nav.router().marker()),
            format!("progress {:>5.1}%", self.nav.progress()),
            format!("cycles  {}", self.nav.cycles()),
            format!("fps     {:.0}", self.fps),
        ];

        let bg = Theme::with_opacity(self.theme.code_background, 0.85);
        let text_color = Theme::with_opacity(self.theme.foreground, 0.9);
        let padding = 16.0 * scale;
        let line_height = 22.0 * scale;
        let hud_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + 16.0 * scale, rect.top() + 16.0 * scale),
            egui::vec2(260.0 * scale, lines.len() as f32 * line_height + padding * 2.0),
        );
        ui.painter().rect_filled(hud_rect, 8.0 * scale, bg);

        let mut y = hud_rect.top() + padding;
        for line in &lines {
            let galley = ui.painter().layout_no_wrap(
                line.clone(),
                egui::FontId::monospace(14.0 * scale),
                text_color,
            );
            ui.painter()
                .galley(egui::pos2(hud_rect.left() + padding, y), galley, text_color);
            y += line_height;
        }
    }

    fn draw_help(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let shortcuts = [
            ("N / \u{2192}", "Next reveal / slide"),
            ("P / \u{2190}", "Previous reveal / slide"),
            ("Alt+\u{2190} / Alt+\u{2192}", "History back / forward"),
            ("Home / End", "First / last slide"),
            ("G", "Toggle overview grid"),
            ("F", "Toggle fullscreen"),
            ("D", "Toggle theme"),
            ("C", "Toggle controls row"),
            ("H", "Toggle diagnostics HUD"),
            ("K", "Toggle this help"),
            ("Esc", "\u{00d7}2 exit"),
            ("Q", "Quit"),
        ];

        let bg = Theme::with_opacity(self.theme.code_background, 0.9);
        let text_color = Theme::with_opacity(self.theme.foreground, 0.9);
        let key_color = Theme::with_opacity(self.theme.accent, 0.9);

        let padding = 24.0 * scale;
        let line_height = 32.0 * scale;
        let help_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
        let help_width = 420.0 * scale;
        let help_rect =
            egui::Rect::from_center_size(rect.center(), egui::vec2(help_width, help_height));

        ui.painter().rect_filled(help_rect, 12.0 * scale, bg);

        let title_galley = ui.painter().layout_no_wrap(
            "Keyboard Shortcuts".to_string(),
            egui::FontId::proportional(20.0 * scale),
            Theme::with_opacity(self.theme.heading_color, 0.9),
        );
        ui.painter().galley(
            egui::pos2(help_rect.left() + padding, help_rect.top() + padding),
            title_galley,
            text_color,
        );

        let mut y = help_rect.top() + padding + 40.0 * scale;
        for (key, desc) in &shortcuts {
            let key_galley = ui.painter().layout_no_wrap(
                key.to_string(),
                egui::FontId::monospace(15.0 * scale),
                key_color,
            );
            ui.painter()
                .galley(egui::pos2(help_rect.left() + padding, y), key_galley, key_color);

            let desc_galley = ui.painter().layout_no_wrap(
                desc.to_string(),
                egui::FontId::proportional(15.0 * scale),
                text_color,
            );
            ui.painter().galley(
                egui::pos2(help_rect.left() + padding + 200.0 * scale, y),
                desc_galley,
                text_color,
            );
            y += line_height;
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        (rect.width() / 1920.0).min(rect.height() / 1080.0)
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_fps();
        self.check_reload();
        if self.watcher.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        let mut intents: Vec<Intent> = Vec::new();

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            if self.handle_prompt_input(i, &mut intents) {
                return;
            }

            // Quit: Q from any mode
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // Ctrl+C double-tap to quit
            if i.modifiers.ctrl && i.key_pressed(egui::Key::C) {
                if let Some(last) = self.last_ctrl_c {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_ctrl_c = Some(Instant::now());
                self.toast = Some(Toast::new("Press Ctrl+C again to quit".to_string()));
                return;
            }

            // Esc double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Theme toggle: D (app-level, not a navigation binding)
            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            // Controls row: C
            if i.key_pressed(egui::Key::C) {
                let hidden = self.nav.router().presentation.controls_hidden();
                self.nav.router_mut().presentation.render_controls(hidden);
                return;
            }

            self.collect_key_intents(i, &mut intents);
            if self.nav.router().get() == ViewMode::Presentation {
                self.collect_swipe_intents(i, &mut intents);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let mut clicked_card: Option<usize> = None;
        let mut pressed_button: Option<ControlButton> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = Self::compute_scale(rect);

                match self.nav.router().get() {
                    ViewMode::Presentation => {
                        self.draw_presentation(ui, rect, scale);
                        pressed_button = self.draw_controls_row(ui, ctx, rect, scale);
                        if let Some(progress) = self.nav.router().progress.as_ref() {
                            render::render_progress_bar(
                                ui,
                                &self.theme,
                                rect,
                                progress.percent(),
                                scale,
                            );
                        }
                    }
                    ViewMode::Overview => {
                        clicked_card = self.draw_overview(ui, ctx, rect, scale);
                    }
                }

                if self.nav.visibility().is_visible("hud") {
                    self.draw_hud(ui, rect, scale);
                }
                if self.nav.visibility().is_visible("help") {
                    self.draw_help(ui, rect, scale);
                }
                self.draw_goto_prompt(ui, rect, scale);
                self.draw_toast(ui, ctx, rect, scale);
            });

        // Route a card click through the overview's selection affordance
        if let Some(ordinal) = clicked_card {
            if let Some(overview) = self.nav.router_mut().overview.as_mut() {
                overview.select(ordinal);
            }
        }
        if let Some(ordinal) = self
            .nav
            .router_mut()
            .overview
            .as_mut()
            .and_then(|o| o.take_selection())
        {
            intents.push(Intent::Select {
                index: ordinal as i64,
            });
        }

        if let Some(button) = pressed_button {
            match self.panel.press(button) {
                Some(intent) => intents.push(intent),
                None => {
                    if button == ControlButton::GoTo {
                        self.goto_prompt = Some(String::new());
                    }
                }
            }
        }

        for intent in intents {
            self.nav.apply(intent);
        }

        // Fullscreen requests are drained after everything else so the
        // viewport command goes out exactly once per toggle
        if let Some(switch) = self.nav.fullscreen_mut() {
            for active in switch.take_requests() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(active));
            }
        }
    }
}

pub struct RunOptions {
    pub windowed: bool,
    pub start_slide: Option<usize>,
    pub start_overview: bool,
    pub watch: bool,
    pub autoplay: bool,
}

/// Start position as `(slide, overview)` from CLI flags and the config's
/// `start_mode` default. Flags win.
fn resolve_start(options: &RunOptions, config_start: Option<&str>) -> (usize, bool) {
    if options.start_overview {
        (options.start_slide.unwrap_or(1), true)
    } else if let Some(s) = options.start_slide {
        (s, false)
    } else {
        match config_start {
            Some("overview") => (1, true),
            Some("first") | None => (1, false),
            Some(n) => (n.parse::<usize>().unwrap_or(1), false),
        }
    }
}

pub fn run(file: PathBuf, options: RunOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let deck = parser::parse(&content);

    if deck.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let config = Config::load_or_default();
    let defaults = config.defaults.as_ref();

    let theme_name = deck
        .meta
        .theme
        .clone()
        .or_else(|| defaults.and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "light".to_string());
    let theme = Theme::from_name(&theme_name);

    let swipe_threshold = defaults
        .and_then(|d| d.swipe_threshold)
        .unwrap_or(DEFAULT_SWIPE_THRESHOLD);
    let swipe = SwipeTracker::new(swipe_threshold)?;

    let autoplay =
        options.autoplay || defaults.and_then(|d| d.autoplay).unwrap_or(false);

    // CLI flags override config for the start position
    let config_start = defaults.and_then(|d| d.start_mode.as_deref());
    let (initial_slide, initial_overview) = resolve_start(&options, config_start);

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        format!(
            "cuedeck \u{2014} {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });

    let watcher = if options.watch {
        Some(DeckWatcher::new(&file)?)
    } else {
        None
    };

    let mut nav = Navigator::new(
        deck,
        NavigatorOptions {
            autoplay,
            ..NavigatorOptions::default()
        },
    );

    // Initial render pass through the same path a history replay takes.
    // The fragment must be canonical; the decoder ignores anything else.
    nav.update_from_fragment(Some(&fragment::encode(initial_slide, 0)));
    if initial_overview {
        nav.apply(Intent::SetMode(ViewMode::Overview));
    }

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(file, nav, theme, swipe, watcher)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
