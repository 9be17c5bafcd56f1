//! Headless workspace core (state/action/effect).

pub mod action;
pub mod artifacts;
pub mod effect;
pub mod event;
pub mod extension;
pub mod navigation;
pub mod services;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use artifacts::{Artifact, ArtifactKind, ArtifactRegistry, OpenOutcome, LAUNCHER_KEY};
pub use effect::Effect;
pub use event::WorkspaceEvent;
pub use navigation::{NavigationRegistry, SectionEntry, SidebarSection};
pub use state::WorkspaceState;
pub use store::{DispatchResult, Store};
pub use workspace::{Notification, SubscriptionId, WorkspaceController};
