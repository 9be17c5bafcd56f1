use compact_str::CompactString;
use std::sync::Arc;

use super::{Action, ArtifactKind, Effect, OpenOutcome, SidebarSection, WorkspaceState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: WorkspaceState,
}

impl Store {
    pub fn new(state: WorkspaceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenArtifact { key, path, kind } => self.reduce_open(key, path, kind),
            Action::CloseArtifact { key } => self.reduce_close(&key),
            Action::SelectSection { section } => self.reduce_select(section),
        }
    }

    fn reduce_open(
        &mut self,
        key: CompactString,
        path: CompactString,
        kind: ArtifactKind,
    ) -> DispatchResult {
        let effect = Effect::LoadArtifact {
            key: key.clone(),
            path: path.clone(),
            kind: kind.clone(),
        };
        // Copy-on-write: a snapshot still held by a renderer keeps its old value.
        let outcome = Arc::make_mut(&mut self.state.artifacts).insert_or_reveal(key, path, kind);
        tracing::debug!(outcome = ?outcome, "open artifact");

        let effects = match outcome {
            OpenOutcome::Inserted => vec![effect],
            OpenOutcome::Revealed | OpenOutcome::AlreadyVisible => Vec::new(),
        };
        DispatchResult {
            effects,
            state_changed: outcome.changed(),
        }
    }

    fn reduce_close(&mut self, key: &str) -> DispatchResult {
        if !self.state.artifacts.contains(key) {
            tracing::debug!(key, "close ignored, artifact not open");
            return DispatchResult::default();
        }

        let removed = Arc::make_mut(&mut self.state.artifacts).remove(key);
        DispatchResult {
            effects: Vec::new(),
            state_changed: removed.is_some(),
        }
    }

    fn reduce_select(&mut self, section: SidebarSection) -> DispatchResult {
        let prev = self.state.sections.active();
        self.state.sections = self.state.sections.select(section);
        DispatchResult {
            effects: Vec::new(),
            state_changed: prev != section,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
