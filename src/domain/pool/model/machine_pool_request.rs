use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::scaling::{MachinePoolAutoscaling, PoolScaling};
use crate::domain::pool::dto::form_fields::Taint;

/// Create/update body for a classic machine pool.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachinePoolRequest {
    pub id: String,
    pub labels: BTreeMap<String, String>,
    pub taints: Vec<Taint>,

    #[serde(flatten)]
    pub scaling: PoolScaling<MachinePoolAutoscaling>,

    // ===== Create-only fields =====
    pub instance_type: Option<String>,
    pub aws: Option<AwsMachinePool>,
    pub root_volume: Option<RootVolume>,
    pub gcp: Option<GcpMachinePool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsMachinePool {
    pub spot_market_options: Option<SpotMarketOptions>,
    pub additional_security_group_ids: Option<Vec<String>>,
}

impl AwsMachinePool {
    pub fn is_empty(&self) -> bool {
        self.spot_market_options.is_none() && self.additional_security_group_ids.is_none()
    }
}

/// Spot bid settings. An empty object means "current spot price, no cap".
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotMarketOptions {
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootVolume {
    pub aws: AwsVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsVolume {
    /// GiB
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpMachinePool {
    pub secure_boot: bool,
}
