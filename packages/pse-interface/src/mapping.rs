use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, StdResult};
use cw_address_like::AddressLike;

/// The ordered recipients a clearing account pays out to.
#[cw_serde]
pub struct ClearingAccountMapping<T: AddressLike> {
    pub clearing_account: String,
    pub recipients: Vec<T>,
}

impl ClearingAccountMapping<String> {
    pub fn into_checked(&self, deps: Deps) -> StdResult<ClearingAccountMapping<Addr>> {
        Ok(ClearingAccountMapping {
            clearing_account: self.clearing_account.clone(),
            recipients: self
                .recipients
                .iter()
                .map(|x| deps.api.addr_validate(x))
                .collect::<StdResult<_>>()?,
        })
    }
}

/// Destination for remainders and for payouts of unmapped clearing accounts.
#[cw_serde]
pub enum FallbackSink<T: AddressLike> {
    CommunityPool {},
    Account { addr: T },
}

impl FallbackSink<String> {
    pub fn into_checked(&self, deps: Deps) -> StdResult<FallbackSink<Addr>> {
        Ok(match self {
            FallbackSink::CommunityPool {} => FallbackSink::CommunityPool {},
            FallbackSink::Account { addr } => FallbackSink::Account {
                addr: deps.api.addr_validate(addr)?,
            },
        })
    }
}
