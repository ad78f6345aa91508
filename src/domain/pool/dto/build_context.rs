use serde::{Deserialize, Serialize};

/// Flags supplied by the caller for a single submission. They decide which
/// derived fields may be set on the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildContext {
    /// Editing an existing pool rather than creating one.
    pub is_edit: bool,

    /// Pool is spread across three availability zones.
    pub is_multi_zone_machine_pool: bool,

    /// ROSA (as opposed to plain OSD) cluster. Classic pools only.
    pub is_rosa_cluster: bool,

    /// Secure boot was already changed through the day-2 flow. Classic pools only.
    pub is_secure_boot_updated: bool,
}

impl BuildContext {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit() -> Self {
        Self {
            is_edit: true,
            ..Self::default()
        }
    }
}
