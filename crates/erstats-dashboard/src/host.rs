use serde::{Deserialize, Serialize};

/// Interaction state owned by the host UI and passed into every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// Zero-based index of the open top-level tab.
    #[serde(default)]
    pub active_tab: usize,

    /// Zero-based index of the open affordability sub-tab.
    #[serde(default)]
    pub affordability_tab: usize,

    /// Hospital chosen in the detail dropdown. `None` means the dropdown's
    /// default, the first hospital.
    #[serde(default)]
    pub selected_hospital: Option<String>,
}

impl HostState {
    pub fn with_hospital(mut self, name: impl Into<String>) -> Self {
        self.selected_hospital = Some(name.into());
        self
    }

    pub fn with_tab(mut self, tab: usize) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn with_affordability_tab(mut self, tab: usize) -> Self {
        self.affordability_tab = tab;
        self
    }
}
