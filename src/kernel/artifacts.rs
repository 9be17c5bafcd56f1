use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, Serializer};
use std::fmt;

use super::extension;

pub const LAUNCHER_KEY: &str = "Launcher";
const LAUNCHER_PATH: &str = "none";
const LAUNCHER_EXTENSION: &str = "txt";

type Entries = FxHashMap<CompactString, Artifact>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "CompactString", into = "CompactString")]
pub enum ArtifactKind {
    Launcher,
    File,
    /// Any category an opener supplies that the core has no name for.
    Other(CompactString),
}

impl ArtifactKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Launcher => "launcher",
            Self::File => "file",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<&str> for ArtifactKind {
    fn from(tag: &str) -> Self {
        match tag {
            "launcher" => Self::Launcher,
            "file" => Self::File,
            other => Self::Other(CompactString::from(other)),
        }
    }
}

impl From<CompactString> for ArtifactKind {
    fn from(tag: CompactString) -> Self {
        match tag.as_str() {
            "launcher" => Self::Launcher,
            "file" => Self::File,
            _ => Self::Other(tag),
        }
    }
}

impl From<String> for ArtifactKind {
    fn from(tag: String) -> Self {
        Self::from(CompactString::from(tag))
    }
}

impl From<ArtifactKind> for CompactString {
    fn from(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Other(tag) => tag,
            known => CompactString::new(known.as_str()),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub key: CompactString,
    pub kind: ArtifactKind,
    /// Opaque locator, only meaningful to whoever loads the content.
    pub path: CompactString,
    /// Derived from `key` once at creation.
    pub extension: Option<CompactString>,
    pub visible: bool,
    pub needs_load: bool,
}

impl Artifact {
    pub fn launcher() -> Self {
        Self {
            key: CompactString::new(LAUNCHER_KEY),
            kind: ArtifactKind::Launcher,
            path: CompactString::new(LAUNCHER_PATH),
            extension: Some(CompactString::new(LAUNCHER_EXTENSION)),
            visible: true,
            needs_load: false,
        }
    }

    fn fresh(key: CompactString, path: CompactString, kind: ArtifactKind) -> Self {
        let extension = extension::resolve(&key).map(CompactString::from);
        Self {
            key,
            kind,
            path,
            extension,
            visible: true,
            needs_load: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The key was new; every sibling was concealed first.
    Inserted,
    /// The key was tracked but hidden and is now visible.
    Revealed,
    AlreadyVisible,
}

impl OpenOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::AlreadyVisible)
    }
}

/// Open artifacts keyed by display name.
///
/// A registry value is a snapshot: [`open`](Self::open) and [`close`](Self::close) consume it
/// and hand back the next one. No "exactly one visible" rule is enforced: reopening a tracked
/// key only reveals that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactRegistry {
    entries: Entries,
}

impl ArtifactRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry a fresh workspace session starts with: just the launcher, visible.
    pub fn seeded() -> Self {
        let mut entries = Entries::default();
        let launcher = Artifact::launcher();
        entries.insert(launcher.key.clone(), launcher);
        Self { entries }
    }

    pub fn open(
        mut self,
        key: impl Into<CompactString>,
        path: impl Into<CompactString>,
        kind: ArtifactKind,
    ) -> Self {
        self.insert_or_reveal(key.into(), path.into(), kind);
        self
    }

    /// Closing an untracked key returns an equal snapshot.
    pub fn close(mut self, key: &str) -> Self {
        self.remove(key);
        self
    }

    pub(crate) fn insert_or_reveal(
        &mut self,
        key: CompactString,
        path: CompactString,
        kind: ArtifactKind,
    ) -> OpenOutcome {
        if let Some(outcome) = reveal_existing(&mut self.entries, &key) {
            return outcome;
        }

        conceal_all(&mut self.entries);
        let artifact = Artifact::fresh(key, path, kind);
        self.entries.insert(artifact.key.clone(), artifact);
        OpenOutcome::Inserted
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<Artifact> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Artifact> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unordered; use [`sorted`](Self::sorted) when a stable order matters.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> + '_ {
        self.entries.values()
    }

    pub fn sorted(&self) -> Vec<&Artifact> {
        let mut artifacts: Vec<&Artifact> = self.entries.values().collect();
        artifacts.sort_by(|a, b| a.key.cmp(&b.key));
        artifacts
    }

    pub fn visible_keys(&self) -> Vec<&str> {
        self.sorted()
            .into_iter()
            .filter(|a| a.visible)
            .map(|a| a.key.as_str())
            .collect()
    }

    /// Artifacts a render collaborator still has to fetch or mount.
    pub fn pending_loads(&self) -> Vec<&Artifact> {
        self.sorted().into_iter().filter(|a| a.needs_load).collect()
    }
}

impl Serialize for ArtifactRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted().into_iter().map(|a| (a.key.as_str(), a)))
    }
}

/// Reopen policy for a key that is already tracked.
///
/// Only the requested artifact is made visible. Siblings keep their `visible` and
/// `needs_load` flags, so a sequence of reopens can leave several artifacts visible at once.
/// A single-active-tab policy would conceal the siblings here instead. Returns `None` when
/// `key` is not tracked.
fn reveal_existing(entries: &mut Entries, key: &str) -> Option<OpenOutcome> {
    let artifact = entries.get_mut(key)?;
    if artifact.visible {
        return Some(OpenOutcome::AlreadyVisible);
    }
    artifact.visible = true;
    Some(OpenOutcome::Revealed)
}

/// Fresh-open policy: hide everything and drop pending load requests before a new insert.
fn conceal_all(entries: &mut Entries) {
    for artifact in entries.values_mut() {
        artifact.visible = false;
        artifact.needs_load = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/artifacts.rs"]
mod tests;
