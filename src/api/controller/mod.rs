pub mod machine_pool;
pub mod node_pool;
