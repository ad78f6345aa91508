use crate::domain::pool::dto::build_context::BuildContext;
use crate::domain::pool::dto::node_pool_form_values::NodePoolFormValues;
use crate::domain::pool::model::node_pool_request::{
    AwsNodePool, NodePool, NodePoolImageType, NodePoolRequest, NodePoolRootVolume,
};
use crate::domain::pool::service::autoscaling::derive_scaling;
use crate::domain::pool::service::label_normalizer::normalize_labels;
use crate::domain::pool::service::taint_normalizer::normalize_taints;

/// Maps hosted node pool form values to the API body.
pub fn build_node_pool_request(
    values: &NodePoolFormValues,
    context: &BuildContext,
) -> NodePoolRequest {
    let mut node_pool = NodePool {
        id: values.name.clone(),
        labels: normalize_labels(&values.node_labels),
        taints: normalize_taints(&values.taints),
        scaling: derive_scaling(&values.scaling, context.is_multi_zone_machine_pool),
        auto_repair: values.auto_repair,
        subnet: None,
        aws_node_pool: None,
    };

    if !context.is_edit {
        node_pool.subnet = values.private_subnet_id.clone();
        node_pool.aws_node_pool = Some(AwsNodePool {
            instance_type: values.instance_type.as_ref().map(|t| t.id.clone()),
            ec2_metadata_http_tokens: values.imds,
            additional_security_group_ids: values.security_group_ids.clone(),
            root_volume: NodePoolRootVolume {
                size: values.disk_size,
            },
        });
    }

    NodePoolRequest {
        node_pool,
        image_type: values
            .is_windows_license_included
            .then_some(NodePoolImageType::Windows),
    }
}
