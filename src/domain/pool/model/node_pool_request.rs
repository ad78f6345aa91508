use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::scaling::{NodePoolAutoscaling, PoolScaling};
use crate::domain::pool::dto::form_fields::{ImdsType, Taint};

/// Node pool body as the upstream schema defines it.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePool {
    pub id: String,
    pub labels: BTreeMap<String, String>,
    pub taints: Vec<Taint>,

    #[serde(flatten)]
    pub scaling: PoolScaling<NodePoolAutoscaling>,

    pub auto_repair: bool,

    // ===== Create-only fields =====
    pub subnet: Option<String>,
    pub aws_node_pool: Option<AwsNodePool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsNodePool {
    pub instance_type: Option<String>,
    pub ec2_metadata_http_tokens: ImdsType,
    pub additional_security_group_ids: Vec<String>,
    pub root_volume: NodePoolRootVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePoolRootVolume {
    /// GiB
    pub size: u32,
}

/// Node image family requested alongside the node pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePoolImageType {
    Windows,
}

/// `NodePool` plus fields the backend accepts ahead of its published schema.
///
/// `image_type` moves into `NodePool` once the schema carries it natively;
/// until then it stays in this wrapper so the schema type is untouched.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePoolRequest {
    #[serde(flatten)]
    pub node_pool: NodePool,

    #[serde(rename = "imageType")]
    pub image_type: Option<NodePoolImageType>,
}
