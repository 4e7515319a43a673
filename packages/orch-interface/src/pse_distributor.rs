use cw_orch::interface;
#[cfg(not(target_arch = "wasm32"))]
use cw_orch::prelude::*;

#[allow(unused_imports)]
use pse_interface::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

pub const CONTRACT_ID: &str = "pse_distributor";

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, id = CONTRACT_ID)]
pub struct PseDistributorContract;

#[cfg(not(target_arch = "wasm32"))]
impl<Chain> Uploadable for PseDistributorContract<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(CONTRACT_ID)
            .unwrap()
    }
    /// Returns a CosmWasm contract wrapper
    fn wrapper() -> Box<dyn MockContract<Empty>> {
        Box::new(
            ContractWrapper::new_with_empty(
                pse_distributor::contract::execute,
                pse_distributor::contract::instantiate,
                pse_distributor::contract::query,
            )
            .with_sudo(pse_distributor::contract::sudo)
            .with_migrate(pse_distributor::contract::migrate),
        )
    }
}
