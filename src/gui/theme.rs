use eframe::egui;

// Brand palette.
pub const DARK_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x44, 0x6a);
pub const MEDIUM_BLUE: egui::Color32 = egui::Color32::from_rgb(0x73, 0xaf, 0xb6);
pub const GOLD: egui::Color32 = egui::Color32::from_rgb(0xff, 0xcf, 0x01);
pub const FLAT_WHITE: egui::Color32 = egui::Color32::from_rgb(0xe7, 0xe7, 0xe7);

/// Visuals for the whole application: medium blue chrome with a flat white
/// text surface.
pub fn menu_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = MEDIUM_BLUE;
    visuals.window_fill = MEDIUM_BLUE;
    visuals.extreme_bg_color = FLAT_WHITE;
    visuals
}
