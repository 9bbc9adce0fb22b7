//! Dashboard sidebar state

use common::{SessionStore, StoreError};
use tracing::debug;

/// Persists whether the sidebar is collapsed
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Resources,
    Users,
    Settings,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Resources,
        Section::Users,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Resources => "Resources",
            Section::Users => "Users",
            Section::Settings => "Settings",
        }
    }
}

/// One sidebar entry ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar state; only `collapsed` survives a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    pub active: Section,
}

impl SidebarState {
    /// Restore the collapsed flag from the store
    pub async fn load(store: &dyn SessionStore) -> Result<Self, StoreError> {
        let collapsed = store.get(SIDEBAR_COLLAPSED_KEY).await?.as_deref() == Some("true");
        Ok(Self {
            collapsed,
            active: Section::default(),
        })
    }

    /// Flip the collapsed flag and persist it
    pub async fn toggle(&mut self, store: &dyn SessionStore) -> Result<(), StoreError> {
        self.collapsed = !self.collapsed;
        debug!("Sidebar collapsed: {}", self.collapsed);
        store
            .set(
                SIDEBAR_COLLAPSED_KEY,
                if self.collapsed { "true" } else { "false" },
            )
            .await
    }

    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    pub fn items(&self) -> Vec<SidebarItem> {
        Section::ALL
            .iter()
            .map(|&section| SidebarItem {
                section,
                label: section.label(),
                active: section == self.active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::InMemorySessionStore;

    #[tokio::test]
    async fn test_toggle_persists_across_loads() -> Result<(), StoreError> {
        let store = InMemorySessionStore::new();
        let mut sidebar = SidebarState::load(&store).await?;
        assert!(!sidebar.collapsed);

        sidebar.toggle(&store).await?;
        assert!(SidebarState::load(&store).await?.collapsed);

        sidebar.toggle(&store).await?;
        assert!(!SidebarState::load(&store).await?.collapsed);
        Ok(())
    }

    #[test]
    fn test_select_marks_single_active_item() {
        let mut sidebar = SidebarState::default();
        sidebar.select(Section::Resources);

        let active: Vec<_> = sidebar
            .items()
            .into_iter()
            .filter(|item| item.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Resources");
    }
}
