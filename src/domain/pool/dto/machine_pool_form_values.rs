use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form_fields::{
    default_disk_size, MachineTypeRef, NodeLabel, ScalingFormValues, SpotInstanceType, Taint,
    POOL_NAME_RE,
};

/// Form values for a classic (self-managed control plane) machine pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MachinePoolFormValues {
    #[validate(length(min = 1, max = 30), regex(path = *POOL_NAME_RE))]
    pub name: String,

    #[serde(default)]
    pub node_labels: Vec<NodeLabel>,

    #[serde(default)]
    pub taints: Vec<Taint>,

    #[serde(flatten)]
    #[validate(nested)]
    pub scaling: ScalingFormValues,

    #[serde(default)]
    pub instance_type: Option<MachineTypeRef>,

    // --- Spot instances ---
    #[serde(default)]
    pub use_spot_instances: bool,
    #[serde(default)]
    pub spot_instance_type: SpotInstanceType,
    /// Hourly bid cap in USD, read only for `SpotInstanceType::Maximum`.
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub max_price: Option<f64>,

    #[serde(default)]
    pub security_group_ids: Vec<String>,

    /// Root volume size in GiB.
    #[serde(default = "default_disk_size")]
    #[validate(range(min = 75, max = 16384))]
    pub disk_size: u32,

    #[serde(default)]
    pub secure_boot: bool,
}

impl MachinePoolFormValues {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_labels: Vec::new(),
            taints: Vec::new(),
            scaling: ScalingFormValues::default(),
            instance_type: None,
            use_spot_instances: false,
            spot_instance_type: SpotInstanceType::default(),
            max_price: None,
            security_group_ids: Vec::new(),
            disk_size: default_disk_size(),
            secure_boot: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_flattened_scaling_and_defaults() {
        let values: MachinePoolFormValues = serde_json::from_value(json!({
            "name": "workers",
            "autoscaling": true,
            "autoscale_min": 1,
            "autoscale_max": 4,
            "instance_type": { "id": "m5.xlarge", "name": "m5.xlarge - General purpose" }
        }))
        .unwrap();

        assert_eq!(values.scaling, ScalingFormValues::autoscaled(1, 4));
        assert_eq!(values.instance_type.unwrap().id, "m5.xlarge");
        assert_eq!(values.disk_size, 300);
        assert_eq!(values.spot_instance_type, SpotInstanceType::OnDemand);
        assert!(values.node_labels.is_empty());
    }

    #[test]
    fn rejects_invalid_name_and_price() {
        let mut values = MachinePoolFormValues::new("Bad_Name");
        values.max_price = Some(0.0);

        let errors = values.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("max_price"));
    }

    #[test]
    fn accepts_defaults_with_valid_name() {
        assert!(MachinePoolFormValues::new("workers").validate().is_ok());
    }
}
