use bat_menu::scripts::list_scripts;
use tempfile::tempdir;

#[test]
fn only_matching_files_become_entries() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("backup.bat"), "echo backup").unwrap();
    std::fs::write(dir.path().join("restore.bat"), "echo restore").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "not a script").unwrap();

    let mut entries = list_scripts(dir.path(), ".bat").unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "backup");
    assert_eq!(entries[0].file, "backup.bat");
    assert_eq!(entries[1].name, "restore");
    assert_eq!(entries[1].file, "restore.bat");
}

#[test]
fn empty_directory_yields_no_entries() {
    let dir = tempdir().unwrap();
    assert!(list_scripts(dir.path(), ".bat").unwrap().is_empty());
}

#[test]
fn suffix_is_stripped_only_from_the_end() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("bat.bat"), "").unwrap();
    std::fs::write(dir.path().join("archive.bat.txt"), "").unwrap();

    let entries = list_scripts(dir.path(), ".bat").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "bat");
    assert_eq!(entries[0].file, "bat.bat");
}

#[test]
fn subdirectories_are_ignored() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested.bat")).unwrap();
    std::fs::write(dir.path().join("real.bat"), "").unwrap();

    let entries = list_scripts(dir.path(), ".bat").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "real");
}

#[test]
fn unreadable_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(list_scripts(&missing, ".bat").is_err());
}
