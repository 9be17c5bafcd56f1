use super::*;
use crate::kernel::{ArtifactKind, SidebarSection, LAUNCHER_KEY};
use std::io::Cursor;

const SCRIPT: &str = r#"
# open a file, switch to git, close the launcher
{"event":"artifact_requested","key":"main.py","path":"/src/main.py","kind":"file"}
{"event":"section_selected","key":"gitPanel"}

{"event":"artifact_closed","key":"Launcher"}
{"event":"section_selected","key":"nowhere"}
"#;

#[test]
fn parse_events_skips_blank_and_comment_lines() {
    let events = parse_events(Cursor::new(SCRIPT)).unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        WorkspaceEvent::ArtifactRequested {
            key: "main.py".into(),
            path: "/src/main.py".into(),
            kind: ArtifactKind::File,
        }
    );
}

#[test]
fn parse_events_reports_line_number_of_bad_input() {
    let input = "{\"event\":\"artifact_closed\",\"key\":\"a\"}\n\n{\"event\":\"explode\"}\n";
    let err = parse_events(Cursor::new(input)).unwrap_err();
    match err {
        ReplayError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn replay_applies_events_in_order() {
    let mut controller = WorkspaceController::new();
    let handled = replay(Cursor::new(SCRIPT), &mut controller).unwrap();
    assert_eq!(handled, 4);

    let artifacts = controller.current_artifacts();
    assert!(!artifacts.contains(LAUNCHER_KEY));
    assert_eq!(artifacts.visible_keys(), vec!["main.py"]);
    assert_eq!(controller.current_sections().active(), SidebarSection::Git);
}

#[test]
fn replay_with_bad_line_leaves_controller_untouched() {
    let mut controller = WorkspaceController::new();
    let before = controller.state().clone();
    let input = "{\"event\":\"artifact_closed\",\"key\":\"Launcher\"}\nnot json\n";

    assert!(replay(Cursor::new(input), &mut controller).is_err());
    assert_eq!(controller.state(), &before);
}

#[test]
fn open_ended_kind_survives_parsing() {
    let input = r#"{"event":"artifact_requested","key":"users","path":"db://users","kind":"table"}"#;
    let events = parse_events(Cursor::new(input)).unwrap();
    assert_eq!(
        events,
        vec![WorkspaceEvent::ArtifactRequested {
            key: "users".into(),
            path: "db://users".into(),
            kind: ArtifactKind::Other("table".into()),
        }]
    );
}
