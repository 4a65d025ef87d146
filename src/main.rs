#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::Path;

use bat_menu::gui::{MenuApp, PROG_VER};
use bat_menu::logging;
use bat_menu::scripts::{self, SCRIPT_SUFFIX};
use bat_menu::settings::{self, WindowSettings};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    logging::init();

    let scripts = scripts::list_scripts(Path::new("."), SCRIPT_SUFFIX)?;
    tracing::info!(count = scripts.len(), "discovered scripts");

    let settings = WindowSettings::load(&settings::settings_path())?;
    let title = format!("{}, v {}", settings::menu_title(settings::TITLE_FILE), PROG_VER);

    let size = settings.window_size("Main", settings::DEFAULT_WINDOW_SIZE);
    let pos = settings.window_pos("Main", settings::DEFAULT_WINDOW_POS);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.0, size.1])
            .with_position([pos.0, pos.1])
            .with_min_inner_size([160.0, 40.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Box::new(MenuApp::new(cc, scripts, settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the ui: {e}"))?;
    Ok(())
}
