use crate::domain::pool::dto::form_fields::ScalingFormValues;
use crate::domain::pool::model::scaling::{AutoscalingBounds, PoolScaling};

/// Availability zones covered by a multi-zone pool.
pub const MULTI_ZONE_COUNT: u32 = 3;

/// Derives the scaling block of a pool payload.
///
/// Autoscale bounds are entered per zone and get multiplied by the zone count.
/// A fixed replica count is already cluster-wide and is sent as entered.
/// The bounds type `A` picks the field naming of the target deployment mode.
pub fn derive_scaling<A: AutoscalingBounds>(
    values: &ScalingFormValues,
    is_multi_zone: bool,
) -> PoolScaling<A> {
    if !values.autoscaling {
        return PoolScaling::Fixed {
            replicas: values.replicas,
        };
    }

    let zones = if is_multi_zone { MULTI_ZONE_COUNT } else { 1 };
    PoolScaling::Autoscaling {
        autoscaling: A::from_bounds(values.autoscale_min * zones, values.autoscale_max * zones),
    }
}
