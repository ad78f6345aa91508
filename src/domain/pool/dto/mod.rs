pub mod build_context;
pub mod form_fields;
pub mod machine_pool_form_values;
pub mod node_pool_form_values;
pub mod pool_build_request;
