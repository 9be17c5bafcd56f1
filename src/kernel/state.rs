use std::sync::Arc;

use super::services::ports::WorkspaceConfig;
use super::{ArtifactRegistry, NavigationRegistry};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WorkspaceState {
    pub artifacts: Arc<ArtifactRegistry>,
    pub sections: NavigationRegistry,
}

impl WorkspaceState {
    pub fn new(config: &WorkspaceConfig) -> Self {
        let artifacts = if config.seed_launcher {
            ArtifactRegistry::seeded()
        } else {
            ArtifactRegistry::empty()
        };
        Self {
            artifacts: Arc::new(artifacts),
            sections: NavigationRegistry::new(config.initial_section),
        }
    }
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}
