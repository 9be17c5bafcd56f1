use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SidebarSection {
    #[serde(rename = "fileBrowser")]
    FileBrowser,
    #[serde(rename = "settingsPanel")]
    Settings,
    #[serde(rename = "gitPanel")]
    Git,
    #[serde(rename = "jupyterInfoPanel")]
    EnvironmentInfo,
    #[serde(rename = "debugPanel")]
    Debugger,
    #[serde(rename = "databasePanel")]
    Database,
    #[serde(rename = "secretsPanel")]
    Secrets,
}

impl SidebarSection {
    pub const ALL: [SidebarSection; 7] = [
        SidebarSection::FileBrowser,
        SidebarSection::Settings,
        SidebarSection::Git,
        SidebarSection::EnvironmentInfo,
        SidebarSection::Debugger,
        SidebarSection::Database,
        SidebarSection::Secrets,
    ];

    /// Key used by the navigation rail.
    pub fn key(self) -> &'static str {
        match self {
            Self::FileBrowser => "fileBrowser",
            Self::Settings => "settingsPanel",
            Self::Git => "gitPanel",
            Self::EnvironmentInfo => "jupyterInfoPanel",
            Self::Debugger => "debugPanel",
            Self::Database => "databasePanel",
            Self::Secrets => "secretsPanel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FileBrowser => "Explorer",
            Self::Settings => "Settings",
            Self::Git => "Source Control",
            Self::EnvironmentInfo => "Environment",
            Self::Debugger => "Debug",
            Self::Database => "Database",
            Self::Secrets => "Secrets",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub section: SidebarSection,
    pub visible: bool,
}

/// Sidebar visibility. Only the active section is stored, so exactly one section is visible
/// in every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRegistry {
    active: SidebarSection,
}

impl Default for NavigationRegistry {
    fn default() -> Self {
        Self::new(SidebarSection::FileBrowser)
    }
}

impl NavigationRegistry {
    pub fn new(active: SidebarSection) -> Self {
        Self { active }
    }

    pub fn select(self, section: SidebarSection) -> Self {
        Self { active: section }
    }

    /// Unknown keys leave the snapshot as it was.
    pub fn select_key(self, key: &str) -> Self {
        match SidebarSection::from_key(key) {
            Some(section) => self.select(section),
            None => self,
        }
    }

    pub fn active(&self) -> SidebarSection {
        self.active
    }

    pub fn is_visible(&self, section: SidebarSection) -> bool {
        self.active == section
    }

    pub fn entries(&self) -> impl Iterator<Item = SectionEntry> + '_ {
        SidebarSection::ALL.into_iter().map(move |section| SectionEntry {
            section,
            visible: self.is_visible(section),
        })
    }
}

#[derive(serde::Serialize)]
struct Visibility {
    visible: bool,
}

impl Serialize for NavigationRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SidebarSection::ALL.len()))?;
        for entry in self.entries() {
            map.serialize_entry(entry.section.key(), &Visibility { visible: entry.visible })?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/navigation.rs"]
mod tests;
