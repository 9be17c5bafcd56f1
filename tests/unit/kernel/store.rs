use super::*;
use crate::kernel::services::ports::WorkspaceConfig;
use crate::kernel::LAUNCHER_KEY;

fn new_store() -> Store {
    Store::new(WorkspaceState::new(&WorkspaceConfig::default()))
}

fn open(key: &str, path: &str) -> Action {
    Action::OpenArtifact {
        key: key.into(),
        path: path.into(),
        kind: ArtifactKind::File,
    }
}

#[test]
fn fresh_open_emits_load_effect_once() {
    let mut store = new_store();

    let first = store.dispatch(open("main.py", "/src/main.py"));
    assert!(first.state_changed);
    assert_eq!(
        first.effects,
        vec![Effect::LoadArtifact {
            key: "main.py".into(),
            path: "/src/main.py".into(),
            kind: ArtifactKind::File,
        }]
    );

    let again = store.dispatch(open("main.py", "/src/main.py"));
    assert!(!again.state_changed);
    assert!(again.effects.is_empty());
    assert!(store.state().artifacts.get("main.py").unwrap().needs_load);
}

#[test]
fn revealing_hidden_artifact_changes_state_without_effects() {
    let mut store = new_store();
    store.dispatch(open("main.py", "/src/main.py"));

    let result = store.dispatch(open(LAUNCHER_KEY, "none"));
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().artifacts.get(LAUNCHER_KEY).unwrap().visible);
    assert!(store.state().artifacts.get("main.py").unwrap().visible);
}

#[test]
fn close_absent_key_reports_no_change() {
    let mut store = new_store();
    let before = store.state().clone();

    let result = store.dispatch(Action::CloseArtifact { key: "nope".into() });
    assert_eq!(result, DispatchResult::default());
    assert_eq!(store.state(), &before);
}

#[test]
fn close_present_key_removes_it() {
    let mut store = new_store();
    let result = store.dispatch(Action::CloseArtifact {
        key: LAUNCHER_KEY.into(),
    });
    assert!(result.state_changed);
    assert!(store.state().artifacts.is_empty());
}

#[test]
fn held_snapshot_is_not_mutated_by_later_dispatches() {
    let mut store = new_store();
    let held = Arc::clone(&store.state().artifacts);

    store.dispatch(open("main.py", "/src/main.py"));
    store.dispatch(Action::CloseArtifact {
        key: LAUNCHER_KEY.into(),
    });

    assert_eq!(*held, crate::kernel::ArtifactRegistry::seeded());
    assert_eq!(store.state().artifacts.len(), 1);
    assert!(store.state().artifacts.contains("main.py"));
}

#[test]
fn select_section_reports_change_only_when_active_moves() {
    let mut store = new_store();

    let same = store.dispatch(Action::SelectSection {
        section: SidebarSection::FileBrowser,
    });
    assert!(!same.state_changed);

    let moved = store.dispatch(Action::SelectSection {
        section: SidebarSection::Git,
    });
    assert!(moved.state_changed);
    assert_eq!(store.state().sections.active(), SidebarSection::Git);
}

#[test]
fn state_honours_config() {
    let config = WorkspaceConfig {
        initial_section: SidebarSection::Secrets,
        seed_launcher: false,
    };
    let store = Store::new(WorkspaceState::new(&config));
    assert!(store.state().artifacts.is_empty());
    assert_eq!(store.state().sections.active(), SidebarSection::Secrets);
}
