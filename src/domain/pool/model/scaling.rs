use serde::{Deserialize, Serialize};

/// Autoscaling bounds on a classic machine pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachinePoolAutoscaling {
    pub min_replicas: u32,
    pub max_replicas: u32,
}

/// Autoscaling bounds on a hosted node pool. The upstream API uses singular
/// field names here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePoolAutoscaling {
    pub min_replica: u32,
    pub max_replica: u32,
}

/// Bounds shape for one deployment mode.
pub trait AutoscalingBounds {
    fn from_bounds(min: u32, max: u32) -> Self;
}

impl AutoscalingBounds for MachinePoolAutoscaling {
    fn from_bounds(min: u32, max: u32) -> Self {
        Self {
            min_replicas: min,
            max_replicas: max,
        }
    }
}

impl AutoscalingBounds for NodePoolAutoscaling {
    fn from_bounds(min: u32, max: u32) -> Self {
        Self {
            min_replica: min,
            max_replica: max,
        }
    }
}

/// Either autoscaling bounds or a fixed replica count, flattened into the
/// pool payload as `autoscaling` or `replicas`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoolScaling<A> {
    Autoscaling { autoscaling: A },
    Fixed { replicas: u32 },
}
