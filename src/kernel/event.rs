use compact_str::CompactString;

use super::ArtifactKind;

/// A boundary call from a UI collaborator, in a form that can travel over the event bus or be
/// read from a replay file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorkspaceEvent {
    /// A sidebar widget resolved a user action to a concrete artifact.
    ArtifactRequested {
        key: CompactString,
        path: CompactString,
        kind: ArtifactKind,
    },
    /// The tab strip dismissed a tab.
    ArtifactClosed { key: CompactString },
    /// The navigation rail was clicked. Keys are checked when handled, not when parsed.
    SectionSelected { key: CompactString },
}
