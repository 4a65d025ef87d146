use std::path::Path;

/// File suffix that marks a launchable script.
#[cfg(windows)]
pub const SCRIPT_SUFFIX: &str = ".bat";
#[cfg(not(windows))]
pub const SCRIPT_SUFFIX: &str = ".sh";

/// One launchable script found in the menu directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// Display label: the file name with the suffix stripped.
    pub name: String,
    /// File to execute, as discovered.
    pub file: String,
}

/// List the scripts in `dir` whose file name ends with `suffix`.
///
/// Entries keep the order the directory listing yields. An empty directory
/// yields an empty list; failure to read the directory is an error.
pub fn list_scripts(dir: &Path, suffix: &str) -> anyhow::Result<Vec<ScriptEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file) = file_name.to_str() else {
            tracing::warn!(name = ?file_name, "skipping non-unicode file name");
            continue;
        };
        if let Some(name) = file.strip_suffix(suffix) {
            entries.push(ScriptEntry {
                name: name.to_string(),
                file: file.to_string(),
            });
        }
    }
    Ok(entries)
}
