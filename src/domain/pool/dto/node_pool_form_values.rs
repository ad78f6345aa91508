use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_fields::{
    default_disk_size, ImdsType, MachineTypeRef, NodeLabel, ScalingFormValues, Taint,
    POOL_NAME_RE,
};

fn default_auto_repair() -> bool {
    true
}

/// Form values for a hosted-control-plane node pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NodePoolFormValues {
    #[validate(length(min = 1, max = 15), regex(path = *POOL_NAME_RE))]
    pub name: String,

    #[serde(default)]
    pub node_labels: Vec<NodeLabel>,

    #[serde(default)]
    pub taints: Vec<Taint>,

    #[serde(flatten)]
    #[validate(nested)]
    pub scaling: ScalingFormValues,

    #[serde(default = "default_auto_repair")]
    pub auto_repair: bool,

    #[serde(default)]
    pub private_subnet_id: Option<String>,

    #[serde(default)]
    pub instance_type: Option<MachineTypeRef>,

    #[serde(default)]
    pub imds: ImdsType,

    #[serde(default)]
    pub security_group_ids: Vec<String>,

    /// Root volume size in GiB.
    #[serde(default = "default_disk_size")]
    #[validate(range(min = 75, max = 16384))]
    pub disk_size: u32,

    #[serde(default)]
    pub is_windows_license_included: bool,
}

impl NodePoolFormValues {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_labels: Vec::new(),
            taints: Vec::new(),
            scaling: ScalingFormValues::default(),
            auto_repair: default_auto_repair(),
            private_subnet_id: None,
            instance_type: None,
            imds: ImdsType::default(),
            security_group_ids: Vec::new(),
            disk_size: default_disk_size(),
            is_windows_license_included: false,
        }
    }
}
