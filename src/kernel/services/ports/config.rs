use serde::{Deserialize, Serialize};

use crate::kernel::SidebarSection;

/// How a fresh workspace session starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub initial_section: SidebarSection,
    /// Seed the registry with the launcher view.
    pub seed_launcher: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            initial_section: SidebarSection::FileBrowser,
            seed_launcher: true,
        }
    }
}
