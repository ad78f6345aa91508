pub mod machine_pool_request;
pub mod node_pool_request;
pub mod scaling;
