use bat_menu::settings::{WindowSettings, DEFAULT_WINDOW_POS, DEFAULT_WINDOW_SIZE};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = WindowSettings::load(&dir.path().join("windows.json")).unwrap();

    assert_eq!(
        settings.window_size("Main", DEFAULT_WINDOW_SIZE),
        DEFAULT_WINDOW_SIZE
    );
    assert_eq!(
        settings.window_pos("backup", DEFAULT_WINDOW_POS),
        DEFAULT_WINDOW_POS
    );
}

#[test]
fn geometry_round_trips_across_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg").join("windows.json");

    let mut settings = WindowSettings::new(&path);
    settings.remember_window("Main", (640.0, 220.0), (12.0, 34.0));
    settings.remember_window("backup", (480.0, 360.0), (100.0, 80.0));
    settings.save().unwrap();

    let reloaded = WindowSettings::load(&path).unwrap();
    assert_eq!(
        reloaded.window_size("Main", DEFAULT_WINDOW_SIZE),
        (640.0, 220.0)
    );
    assert_eq!(
        reloaded.window_pos("Main", DEFAULT_WINDOW_POS),
        (12.0, 34.0)
    );
    assert_eq!(
        reloaded.window_size("backup", DEFAULT_WINDOW_SIZE),
        (480.0, 360.0)
    );
    assert_eq!(
        reloaded.window_pos("backup", DEFAULT_WINDOW_POS),
        (100.0, 80.0)
    );
}

#[test]
fn entries_use_the_window_key_scheme() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("windows.json");

    let mut settings = WindowSettings::new(&path);
    settings.remember_window("Main", (200.0, 40.0), (5.0, 6.0));
    settings.remember_window("backup", (300.0, 150.0), (7.0, 8.0));
    settings.save().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"MainWindowSize\""));
    assert!(content.contains("\"MainWindowPos\""));
    assert!(content.contains("\"backupWindowSize\""));
    assert!(content.contains("\"backupWindowPos\""));
}

#[test]
fn unknown_keys_fall_back_to_the_supplied_default() {
    let dir = tempdir().unwrap();
    let mut settings = WindowSettings::new(dir.path().join("windows.json"));
    settings.remember_window("backup", (1.0, 2.0), (3.0, 4.0));

    assert_eq!(settings.window_size("restore", (11.0, 12.0)), (11.0, 12.0));
    assert_eq!(settings.value("backupWindowSize", (0.0, 0.0)), (1.0, 2.0));
}
