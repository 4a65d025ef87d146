mod output_window;
pub mod theme;

pub use output_window::{OutputWindow, RunPhase};

use crate::scripts::ScriptEntry;
use crate::settings::{WindowSettings, DEFAULT_WINDOW_POS, DEFAULT_WINDOW_SIZE};
use eframe::egui;
use std::time::Duration;

/// Shown in the main window title next to the menu title.
pub const PROG_VER: &str = "2.0";

/// The main menu window: one button per discovered script.
pub struct MenuApp {
    scripts: Vec<ScriptEntry>,
    windows: Vec<OutputWindow>,
    settings: WindowSettings,
    launched: u64,
    window_size: (f32, f32),
    window_pos: (f32, f32),
    saved: bool,
}

impl MenuApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        scripts: Vec<ScriptEntry>,
        settings: WindowSettings,
    ) -> Self {
        cc.egui_ctx.set_visuals(theme::menu_visuals());
        let window_size = settings.window_size("Main", DEFAULT_WINDOW_SIZE);
        let window_pos = settings.window_pos("Main", DEFAULT_WINDOW_POS);
        Self {
            scripts,
            windows: Vec::new(),
            settings,
            launched: 0,
            window_size,
            window_pos,
            saved: false,
        }
    }

    /// Write the main geometry and that of any still-open output windows,
    /// then save the store. Happens at most once, on exit.
    fn persist_geometry(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        self.settings
            .remember_window("Main", self.window_size, self.window_pos);
        for window in &mut self.windows {
            window.remember(&mut self.settings);
        }
        if let Err(e) = self.settings.save() {
            tracing::error!(error = %e, "failed to save window settings");
        }
    }
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = (rect.width(), rect.height());
        }
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.window_pos = (rect.min.x, rect.min.y);
        }

        let mut clicked: Option<ScriptEntry> = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for entry in &self.scripts {
                    let button = egui::Button::new(
                        egui::RichText::new(entry.name.as_str()).color(theme::GOLD),
                    )
                    .fill(theme::DARK_BLUE);
                    if ui.add(button).clicked() {
                        clicked = Some(entry.clone());
                    }
                }
            });
        });
        if let Some(entry) = clicked {
            tracing::info!(script = %entry.file, "launching script");
            self.launched += 1;
            self.windows
                .push(OutputWindow::new(&entry, self.launched, &self.settings));
        }

        for window in &mut self.windows {
            window.ui(ctx, &mut self.settings);
        }
        self.windows.retain(|w| w.open);

        // Streamed output has to show up without user input.
        if self.windows.iter().any(|w| w.is_running()) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_geometry();
    }
}
