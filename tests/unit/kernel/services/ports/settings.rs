use super::*;
use crate::kernel::SidebarSection;

#[test]
fn empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log.filter, DEFAULT_LOG_FILTER);
    assert!(!settings.log.stderr);
    assert_eq!(settings.workspace, WorkspaceConfig::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{ "workspace": { "seed_launcher": false }, "log": { "stderr": true } }"#,
    )
    .expect("deserialize Settings");

    assert!(!settings.workspace.seed_launcher);
    assert_eq!(settings.workspace.initial_section, SidebarSection::FileBrowser);
    assert!(settings.log.stderr);
    assert_eq!(settings.log.filter, DEFAULT_LOG_FILTER);
}

#[test]
fn unknown_section_key_is_rejected() {
    let err = serde_json::from_str::<Settings>(r#"{ "workspace": { "initial_section": "terminal" } }"#)
        .unwrap_err();
    assert!(err.is_data());
}

#[test]
fn serde_roundtrip_preserves_values() {
    let original = Settings {
        workspace: WorkspaceConfig {
            initial_section: SidebarSection::Database,
            seed_launcher: false,
        },
        log: LogSettings {
            filter: "ideshell=debug".to_string(),
            stderr: true,
        },
    };
    let json = serde_json::to_string(&original).expect("serialize Settings");
    let decoded: Settings = serde_json::from_str(&json).expect("deserialize Settings");
    assert_eq!(decoded, original);
}
