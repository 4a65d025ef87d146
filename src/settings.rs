use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ORG_DIR: &str = "brmc";
pub const APP_DIR: &str = "batmenu";
pub const SETTINGS_FILE: &str = "windows.json";

/// Optional first-line title file in the working directory.
pub const TITLE_FILE: &str = "batmenu.cfg";
pub const DEFAULT_TITLE: &str = "Batch File Menu System";

pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (180.0, 30.0);
pub const DEFAULT_WINDOW_POS: (f32, f32) = (50.0, 50.0);

/// Persisted window geometry, one `(f32, f32)` pair per key.
///
/// Keys follow the `<window>WindowSize` / `<window>WindowPos` scheme, where
/// `<window>` is `"Main"` or a script's display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(flatten)]
    entries: HashMap<String, (f32, f32)>,
    #[serde(skip)]
    path: PathBuf,
}

impl WindowSettings {
    /// An empty store that will save to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            path: path.into(),
        }
    }

    /// Load the store from `path`. A missing or empty file yields an empty
    /// store; malformed JSON is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::new(path));
        }
        let mut settings: Self = serde_json::from_str(&content)?;
        settings.path = path.to_path_buf();
        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn value(&self, key: &str, default: (f32, f32)) -> (f32, f32) {
        self.entries.get(key).copied().unwrap_or(default)
    }

    pub fn set_value(&mut self, key: &str, value: (f32, f32)) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn window_size(&self, window: &str, default: (f32, f32)) -> (f32, f32) {
        self.value(&format!("{window}WindowSize"), default)
    }

    pub fn window_pos(&self, window: &str, default: (f32, f32)) -> (f32, f32) {
        self.value(&format!("{window}WindowPos"), default)
    }

    /// Record the current geometry of `window` under its size and position keys.
    pub fn remember_window(&mut self, window: &str, size: (f32, f32), pos: (f32, f32)) {
        self.set_value(&format!("{window}WindowSize"), size);
        self.set_value(&format!("{window}WindowPos"), pos);
    }
}

/// Location of the settings file inside the platform config directory.
pub fn settings_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ORG_DIR)
        .join(APP_DIR)
        .join(SETTINGS_FILE)
}

/// Read the menu title from the first line of `path`, falling back to
/// [`DEFAULT_TITLE`] when the file is absent, unreadable, or blank.
pub fn menu_title(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => match content.lines().next() {
            Some(line) if !line.trim().is_empty() => line.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        },
        Err(_) => DEFAULT_TITLE.to_string(),
    }
}
