use super::*;
use crate::kernel::SidebarSection;
use tempfile::tempdir;

#[test]
fn load_settings_from_reads_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "workspace": { "initial_section": "debugPanel" }, "log": { "filter": "ideshell=trace" } }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.workspace.initial_section, SidebarSection::Debugger);
    assert!(settings.workspace.seed_launcher);
    assert_eq!(settings.log.filter, "ideshell=trace");
}

#[test]
fn load_settings_from_missing_file_is_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn load_settings_from_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    match err {
        SettingsError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn settings_path_ends_with_file_name() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with("settings.json"));
    }
}
