use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::build_context::BuildContext;
use super::machine_pool_form_values::MachinePoolFormValues;
use super::node_pool_form_values::NodePoolFormValues;

/// Submission payload for a classic machine pool.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MachinePoolBuildRequest {
    #[validate(nested)]
    pub values: MachinePoolFormValues,
    #[serde(default)]
    pub context: BuildContext,
}

/// Submission payload for a hosted node pool.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_subnet_on_create"))]
pub struct NodePoolBuildRequest {
    #[validate(nested)]
    pub values: NodePoolFormValues,
    #[serde(default)]
    pub context: BuildContext,
}

/// New node pools are placed in exactly one private subnet.
fn validate_subnet_on_create(req: &NodePoolBuildRequest) -> Result<(), ValidationError> {
    let has_subnet = req
        .values
        .private_subnet_id
        .as_deref()
        .is_some_and(|id| !id.is_empty());

    if !req.context.is_edit && !has_subnet {
        let mut err = ValidationError::new("subnet_required");
        err.message = Some(Cow::from("a private subnet is required to create a node pool"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_pool_create_requires_subnet() {
        let req = NodePoolBuildRequest {
            values: NodePoolFormValues::new("np"),
            context: BuildContext::create(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors()["__all__"][0].code, "subnet_required");
    }

    #[test]
    fn node_pool_edit_does_not_require_subnet() {
        let req = NodePoolBuildRequest {
            values: NodePoolFormValues::new("np"),
            context: BuildContext::edit(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn nested_form_errors_surface_on_the_request() {
        let req = MachinePoolBuildRequest {
            values: MachinePoolFormValues::new(""),
            context: BuildContext::create(),
        };
        assert!(req.validate().is_err());
    }
}
