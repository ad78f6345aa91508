use anyhow::Result;
use tracing::{debug, warn};
use validator::Validate;

use crate::domain::pool::dto::pool_build_request::NodePoolBuildRequest;
use crate::domain::pool::model::node_pool_request::NodePoolRequest;
use crate::domain::pool::service::node_pool_request_builder::build_node_pool_request;

/// Validates a hosted submission and returns the body to send upstream.
pub async fn build_node_pool_payload(req: NodePoolBuildRequest) -> Result<NodePoolRequest> {
    if let Err(errors) = req.validate() {
        warn!("Rejected node pool '{}': {}", req.values.name, errors);
        return Err(errors.into());
    }

    let request = build_node_pool_request(&req.values, &req.context);

    debug!(
        "Built node pool '{}' (edit = {}, subnet = {:?}, image_type = {:?})",
        request.node_pool.id, req.context.is_edit, request.node_pool.subnet, request.image_type
    );

    Ok(request)
}
