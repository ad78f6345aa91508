use std::sync::Arc;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub machine_pool_service: Arc<MachinePoolService>,
    pub node_pool_service: Arc<NodePoolService>,
}

pub fn build_app_state() -> AppState {
    AppState {
        machine_pool_service: Arc::new(MachinePoolService::default()),
        node_pool_service: Arc::new(NodePoolService::default()),
    }
}

#[derive(Clone, Default)]
pub struct MachinePoolService;

impl MachinePoolService {
    delegate_async_service! {
        fn build_machine_pool_payload(req: crate::domain::pool::dto::pool_build_request::MachinePoolBuildRequest) -> crate::domain::pool::model::machine_pool_request::MachinePoolRequest => crate::domain::pool::service::machine_pool_service::build_machine_pool_payload;
    }
}

#[derive(Clone, Default)]
pub struct NodePoolService;

impl NodePoolService {
    delegate_async_service! {
        fn build_node_pool_payload(req: crate::domain::pool::dto::pool_build_request::NodePoolBuildRequest) -> crate::domain::pool::model::node_pool_request::NodePoolRequest => crate::domain::pool::service::node_pool_service::build_node_pool_payload;
    }
}
