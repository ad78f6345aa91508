use anyhow::Result;
use tracing::{debug, warn};
use validator::Validate;

use crate::domain::pool::dto::pool_build_request::MachinePoolBuildRequest;
use crate::domain::pool::model::machine_pool_request::MachinePoolRequest;
use crate::domain::pool::service::machine_pool_request_builder::build_machine_pool_request;

/// Validates a classic submission and returns the body to send upstream.
pub async fn build_machine_pool_payload(req: MachinePoolBuildRequest) -> Result<MachinePoolRequest> {
    if let Err(errors) = req.validate() {
        warn!("Rejected machine pool '{}': {}", req.values.name, errors);
        return Err(errors.into());
    }

    let request = build_machine_pool_request(&req.values, &req.context);

    debug!(
        "Built machine pool '{}' (edit = {}, multi_zone = {}, aws = {})",
        request.id,
        req.context.is_edit,
        req.context.is_multi_zone_machine_pool,
        request.aws.is_some()
    );

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pool::dto::build_context::BuildContext;
    use crate::domain::pool::dto::form_fields::ScalingFormValues;
    use crate::domain::pool::dto::machine_pool_form_values::MachinePoolFormValues;
    use crate::domain::pool::model::scaling::{MachinePoolAutoscaling, PoolScaling};
    use serde_json::json;
    use validator::ValidationErrors;

    #[tokio::test]
    async fn builds_valid_submission() {
        let mut values = MachinePoolFormValues::new("workers");
        values.scaling = ScalingFormValues::autoscaled(1, 2);
        let req = MachinePoolBuildRequest {
            values,
            context: BuildContext {
                is_multi_zone_machine_pool: true,
                ..BuildContext::edit()
            },
        };

        let request = build_machine_pool_payload(req).await.expect("build should succeed");
        assert_eq!(
            request.scaling,
            PoolScaling::Autoscaling {
                autoscaling: MachinePoolAutoscaling {
                    min_replicas: 3,
                    max_replicas: 6
                }
            }
        );
    }

    #[tokio::test]
    async fn rejects_invalid_submission_with_validation_errors() {
        let req: MachinePoolBuildRequest = serde_json::from_value(json!({
            "values": {
                "name": "workers",
                "autoscaling": true,
                "autoscale_min": 4,
                "autoscale_max": 1
            }
        }))
        .unwrap();

        let err = build_machine_pool_payload(req).await.unwrap_err();
        assert!(err.downcast_ref::<ValidationErrors>().is_some());
    }
}
