//! Machine pool (classic) and node pool (hosted control plane) payload building.

pub mod dto;
pub mod model;
pub mod service;
