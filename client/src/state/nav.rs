//! Dashboard shell navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::{Deserialize, Serialize};

/// Key of a dashboard view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    #[default]
    Dashboard,
    BomUpload,
    SupplierDiscovery,
    RfqManagement,
    QuoteMatrix,
    ErpExport,
}

impl NavKey {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::BomUpload,
        Self::SupplierDiscovery,
        Self::RfqManagement,
        Self::QuoteMatrix,
        Self::ErpExport,
    ];

    /// Stable id used by menu items and quick actions.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::BomUpload => "bom-upload",
            Self::SupplierDiscovery => "supplier-discovery",
            Self::RfqManagement => "rfq-management",
            Self::QuoteMatrix => "quote-matrix",
            Self::ErpExport => "erp-export",
        }
    }

    /// Resolve a menu id. Unknown ids land on the overview.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.id() == id).unwrap_or_default()
    }
}

/// One sidebar menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub key: NavKey,
    pub name: String,
    pub icon: String,
    pub href: String,
}

/// Signed-in user shown in the sidebar footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub company: String,
    pub role: String,
    /// Initials rendered in the avatar circle.
    pub avatar: String,
}

/// Which dashboard view is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub active: NavKey,
}

impl ShellState {
    /// Switch the active view by menu id and return the resolved key.
    pub fn navigate(&mut self, id: &str) -> NavKey {
        let key = NavKey::from_id(id);
        if key.id() != id {
            log::warn!("unknown dashboard view '{id}', showing {}", key.id());
        }
        self.active = key;
        key
    }

    #[must_use]
    pub fn is_active(&self, key: NavKey) -> bool {
        self.active == key
    }
}
