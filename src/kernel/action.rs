use compact_str::CompactString;

use super::{ArtifactKind, SidebarSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenArtifact {
        key: CompactString,
        path: CompactString,
        kind: ArtifactKind,
    },
    CloseArtifact {
        key: CompactString,
    },
    SelectSection {
        section: SidebarSection,
    },
}
