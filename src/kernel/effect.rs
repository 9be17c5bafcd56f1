use compact_str::CompactString;

use super::ArtifactKind;

/// Work handed to collaborators outside the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emitted once per fresh insertion, alongside `needs_load`.
    LoadArtifact {
        key: CompactString,
        path: CompactString,
        kind: ArtifactKind,
    },
}
