use crate::domain::pool::dto::build_context::BuildContext;
use crate::domain::pool::dto::form_fields::SpotInstanceType;
use crate::domain::pool::dto::machine_pool_form_values::MachinePoolFormValues;
use crate::domain::pool::model::machine_pool_request::{
    AwsMachinePool, AwsVolume, GcpMachinePool, MachinePoolRequest, RootVolume, SpotMarketOptions,
};
use crate::domain::pool::service::autoscaling::derive_scaling;
use crate::domain::pool::service::label_normalizer::normalize_labels;
use crate::domain::pool::service::taint_normalizer::normalize_taints;

/// Maps classic machine pool form values to the API body.
///
/// Edits only carry id, labels, taints and scaling; instance type and
/// cloud placement are fixed once the pool exists.
pub fn build_machine_pool_request(
    values: &MachinePoolFormValues,
    context: &BuildContext,
) -> MachinePoolRequest {
    let mut request = MachinePoolRequest {
        id: values.name.clone(),
        labels: normalize_labels(&values.node_labels),
        taints: normalize_taints(&values.taints),
        scaling: derive_scaling(&values.scaling, context.is_multi_zone_machine_pool),
        instance_type: None,
        aws: None,
        root_volume: None,
        gcp: None,
    };

    if context.is_edit {
        return request;
    }

    request.instance_type = values.instance_type.as_ref().map(|t| t.id.clone());

    let mut aws = AwsMachinePool::default();

    if values.use_spot_instances {
        let max_price = match values.spot_instance_type {
            SpotInstanceType::Maximum => values.max_price,
            SpotInstanceType::OnDemand => None,
        };
        aws.spot_market_options = Some(SpotMarketOptions { max_price });
    }

    if !values.security_group_ids.is_empty() {
        aws.additional_security_group_ids = Some(values.security_group_ids.clone());
    }

    if context.is_rosa_cluster {
        request.root_volume = Some(RootVolume {
            aws: AwsVolume {
                size: values.disk_size,
            },
        });
    }

    // Set on every create unless the day-2 flow already handled it, whatever
    // the cloud provider.
    if !context.is_secure_boot_updated {
        request.gcp = Some(GcpMachinePool {
            secure_boot: values.secure_boot,
        });
    }

    if !aws.is_empty() {
        request.aws = Some(aws);
    }

    request
}
