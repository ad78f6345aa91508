pub mod autoscaling;
pub mod label_normalizer;
pub mod machine_pool_request_builder;
pub mod machine_pool_service;
pub mod node_pool_request_builder;
pub mod node_pool_service;
pub mod taint_normalizer;
