//! Sidebar navigation derived from a role's section access

use serde::Serialize;

use super::sections::Section;
use super::system::PermissionChecker;

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub section: Section,
    pub label: &'static str,
    /// Locked entries are shown disabled
    pub enabled: bool,
}

/// Sections split into those the role can open and those it cannot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    available: Vec<Section>,
    locked: Vec<Section>,
}

impl Navigation {
    pub fn for_checker(checker: &PermissionChecker) -> Self {
        let (available, locked): (Vec<Section>, Vec<Section>) = Section::ALL
            .iter()
            .copied()
            .partition(|section| checker.can_access(*section));

        Self { available, locked }
    }

    pub fn available(&self) -> &[Section] {
        &self.available
    }

    pub fn locked(&self) -> &[Section] {
        &self.locked
    }

    /// Enabled entries in menu order followed by the locked ones
    pub fn menu(&self) -> Vec<MenuItem> {
        let enabled = self.available.iter().map(|section| MenuItem {
            section: *section,
            label: section.label(),
            enabled: true,
        });
        let disabled = self.locked.iter().map(|section| MenuItem {
            section: *section,
            label: section.label(),
            enabled: false,
        });

        enabled.chain(disabled).collect()
    }

    /// Section to display for a requested one
    ///
    /// Falls back to the first available section, then to the dashboard.
    pub fn resolve_active(&self, requested: &str) -> Section {
        Section::lookup(requested)
            .filter(|section| self.available.contains(section))
            .or_else(|| self.available.first().copied())
            .unwrap_or(Section::Dashboard)
    }
}
