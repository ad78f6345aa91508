use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// DNS-1035 label, shared by machine pool and node pool names.
pub static POOL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("valid pool name regex"));

/// Default root volume size in GiB for new worker nodes.
pub const DEFAULT_DISK_SIZE_GIB: u32 = 300;

pub fn default_disk_size() -> u32 {
    DEFAULT_DISK_SIZE_GIB
}

/// One label row as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLabel {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl NodeLabel {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaintEffect {
    #[default]
    NoSchedule,
    PreferNoSchedule,
    NoExecute,
}

/// Taint spec. The same shape is sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taint {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub effect: TaintEffect,
}

impl Taint {
    pub fn new(key: impl Into<String>, value: impl Into<String>, effect: TaintEffect) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            effect,
        }
    }
}

/// Selected instance type. Only the identifier is sent upstream; any other
/// catalogue fields the form posts along are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineTypeRef {
    pub id: String,
}

/// Spot pricing strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpotInstanceType {
    /// Pay the current spot price, capped at the on-demand price.
    #[default]
    OnDemand,
    /// Pay up to a user-chosen maximum.
    Maximum,
}

/// Instance Metadata Service mode, sent as `ec2_metadata_http_tokens`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImdsType {
    /// IMDSv1 and IMDSv2.
    #[default]
    Optional,
    /// IMDSv2 only.
    Required,
}

/// Replica settings common to both pool kinds.
///
/// `autoscale_min` / `autoscale_max` are per zone; `replicas` is the
/// cluster-wide total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_autoscale_bounds"))]
pub struct ScalingFormValues {
    #[serde(default)]
    pub autoscaling: bool,
    #[serde(default)]
    #[validate(range(max = 500))]
    pub autoscale_min: u32,
    #[serde(default)]
    #[validate(range(max = 500))]
    pub autoscale_max: u32,
    #[serde(default)]
    #[validate(range(max = 500))]
    pub replicas: u32,
}

impl ScalingFormValues {
    pub fn autoscaled(min: u32, max: u32) -> Self {
        Self {
            autoscaling: true,
            autoscale_min: min,
            autoscale_max: max,
            replicas: 0,
        }
    }

    pub fn fixed(replicas: u32) -> Self {
        Self {
            replicas,
            ..Self::default()
        }
    }
}

fn validate_autoscale_bounds(values: &ScalingFormValues) -> Result<(), ValidationError> {
    if values.autoscaling && values.autoscale_min > values.autoscale_max {
        let mut err = ValidationError::new("autoscale_bounds");
        err.message = Some(Cow::from(
            "minimum node count must not exceed maximum node count",
        ));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn autoscale_min_above_max_is_rejected() {
        let values = ScalingFormValues::autoscaled(5, 2);
        let errors = values.validate().unwrap_err();
        let schema_errors = errors.field_errors();
        assert_eq!(schema_errors["__all__"][0].code, "autoscale_bounds");
    }

    #[test]
    fn inverted_bounds_are_ignored_when_autoscaling_is_off() {
        let values = ScalingFormValues {
            autoscaling: false,
            autoscale_min: 5,
            autoscale_max: 2,
            replicas: 3,
        };
        assert!(values.validate().is_ok());
    }

    #[test]
    fn pool_name_regex_accepts_dns_labels_only() {
        assert!(POOL_NAME_RE.is_match("workers-1"));
        assert!(POOL_NAME_RE.is_match("a"));
        assert!(!POOL_NAME_RE.is_match("1workers"));
        assert!(!POOL_NAME_RE.is_match("workers-"));
        assert!(!POOL_NAME_RE.is_match("Workers"));
    }

    #[test]
    fn enum_wire_values_match_form_values() {
        assert_eq!(serde_json::to_value(SpotInstanceType::OnDemand).unwrap(), json!("onDemand"));
        assert_eq!(serde_json::to_value(SpotInstanceType::Maximum).unwrap(), json!("maximum"));
        assert_eq!(serde_json::to_value(ImdsType::Required).unwrap(), json!("required"));
        assert_eq!(
            serde_json::to_value(Taint::new("k", "v", TaintEffect::PreferNoSchedule)).unwrap(),
            json!({ "key": "k", "value": "v", "effect": "PreferNoSchedule" })
        );
    }
}
