//! API route declarations (e.g., /api/v1/*)

pub mod machine_pool_routes;
pub mod node_pool_routes;
