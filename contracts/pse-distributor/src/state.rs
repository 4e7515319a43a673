use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};
use pse_interface::{distribution::CompletedDistribution, mapping::FallbackSink};
use pse_schedule::ClearingAccountAllocation;

#[cw_serde]
pub struct Config {
    pub denom: String,
    pub fallback_sink: FallbackSink<Addr>,
    /// Period count of the schedule installed last, at instantiation or by replacement
    pub periods: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Balance of every clearing account, keyed by name. The key set is fixed at instantiation.
pub const CLEARING_ACCOUNTS: Map<&str, Uint128> = Map::new("clearing_accounts");
pub const RECIPIENT_MAPPINGS: Map<&str, Vec<Addr>> = Map::new("recipient_mappings");
/// Pending periods keyed by their due timestamp
pub const SCHEDULE: Map<u64, Vec<ClearingAccountAllocation>> = Map::new("schedule");
/// Scheduled time of the most recently processed period
pub const LAST_PROCESSED: Item<u64> = Item::new("last_processed");

/// Page size used by list queries when the caller does not pass a limit.
pub const DEFAULT_LIMIT: u32 = 30;

pub struct CompletedDistributionIndexes<'a> {
    pub clearing_account: MultiIndex<'a, String, CompletedDistribution, (u64, String)>,
}

impl IndexList<CompletedDistribution> for CompletedDistributionIndexes<'_> {
    fn get_indexes(
        &'_ self,
    ) -> Box<dyn Iterator<Item = &'_ dyn Index<CompletedDistribution>> + '_> {
        let v: Vec<&dyn Index<CompletedDistribution>> = vec![&self.clearing_account];
        Box::new(v.into_iter())
    }
}

/// Payout records keyed by `(scheduled_time, clearing_account)`.
pub fn completed_distributions<'a>(
) -> IndexedMap<'a, (u64, String), CompletedDistribution, CompletedDistributionIndexes<'a>> {
    let indexes = CompletedDistributionIndexes {
        clearing_account: MultiIndex::new(
            |_pk, d: &CompletedDistribution| d.clearing_account.clone(),
            "completed_distributions",
            "completed_distributions__clearing_account",
        ),
    };

    IndexedMap::new("completed_distributions", indexes)
}
