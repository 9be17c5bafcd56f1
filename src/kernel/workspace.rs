//! Session-scoped composition root.
//!
//! UI collaborators call the `on_*` entry points (or push [`WorkspaceEvent`]s over the event
//! bus); renderers subscribe and read the snapshot handed to them on every call.

use compact_str::CompactString;
use std::sync::mpsc::TryRecvError;
use std::sync::Arc;

use super::services::bus::EventReceiver;
use super::services::ports::WorkspaceConfig;
use super::{
    Action, ArtifactKind, ArtifactRegistry, DispatchResult, Effect, NavigationRegistry,
    SidebarSection, Store, WorkspaceEvent, WorkspaceState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a subscriber sees after each boundary call.
#[derive(Debug)]
pub struct Notification<'a> {
    pub state: &'a WorkspaceState,
    pub state_changed: bool,
    pub effects: &'a [Effect],
}

type Subscriber = Box<dyn FnMut(&Notification<'_>)>;

pub struct WorkspaceController {
    store: Store,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for WorkspaceController {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceController {
    pub fn new() -> Self {
        Self::with_config(&WorkspaceConfig::default())
    }

    pub fn with_config(config: &WorkspaceConfig) -> Self {
        Self {
            store: Store::new(WorkspaceState::new(config)),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        self.store.state()
    }

    pub fn current_artifacts(&self) -> Arc<ArtifactRegistry> {
        Arc::clone(&self.store.state().artifacts)
    }

    pub fn current_sections(&self) -> NavigationRegistry {
        self.store.state().sections
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Notification<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn open_artifact(
        &mut self,
        key: impl Into<CompactString>,
        path: impl Into<CompactString>,
        kind: impl Into<ArtifactKind>,
    ) -> DispatchResult {
        self.commit(Action::OpenArtifact {
            key: key.into(),
            path: path.into(),
            kind: kind.into(),
        })
    }

    pub fn close_artifact(&mut self, key: impl Into<CompactString>) -> DispatchResult {
        self.commit(Action::CloseArtifact { key: key.into() })
    }

    pub fn select_section(&mut self, section: SidebarSection) -> DispatchResult {
        self.commit(Action::SelectSection { section })
    }

    /// String-keyed variant for the navigation rail. Unknown keys are logged and leave the
    /// state untouched; subscribers are still notified.
    pub fn select_section_key(&mut self, key: &str) -> DispatchResult {
        match SidebarSection::from_key(key) {
            Some(section) => self.select_section(section),
            None => {
                tracing::warn!(key, "unknown sidebar section");
                let result = DispatchResult::default();
                self.notify(&result);
                result
            }
        }
    }

    pub fn on_artifact_requested(
        &mut self,
        key: impl Into<CompactString>,
        path: impl Into<CompactString>,
        kind: impl Into<ArtifactKind>,
    ) -> DispatchResult {
        self.open_artifact(key, path, kind)
    }

    pub fn on_artifact_closed(&mut self, key: impl Into<CompactString>) -> DispatchResult {
        self.close_artifact(key)
    }

    pub fn on_section_selected(&mut self, key: &str) -> DispatchResult {
        self.select_section_key(key)
    }

    pub fn handle(&mut self, event: WorkspaceEvent) -> DispatchResult {
        match event {
            WorkspaceEvent::ArtifactRequested { key, path, kind } => {
                self.on_artifact_requested(key, path, kind)
            }
            WorkspaceEvent::ArtifactClosed { key } => self.on_artifact_closed(key),
            WorkspaceEvent::SectionSelected { key } => self.on_section_selected(&key),
        }
    }

    /// Handles every queued event in send order and returns how many were handled.
    pub fn drain(&mut self, rx: &mut EventReceiver) -> usize {
        let mut handled = 0usize;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    self.handle(event);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    fn commit(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(action = ?action, "dispatch");
        let result = self.store.dispatch(action);
        self.notify(&result);
        result
    }

    fn notify(&mut self, result: &DispatchResult) {
        let notification = Notification {
            state: self.store.state(),
            state_changed: result.state_changed,
            effects: &result.effects,
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&notification);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
