use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, StdResult, Storage, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::must_pay;
use pse_schedule::{validate_schedule, ScheduleError, ScheduledDistribution};

use crate::{
    distribute::Transfers,
    ledger, queue,
    state::{CONFIG, LAST_PROCESSED},
    ContractError,
};

/// Only the governance authority may pass.
pub(crate) fn assert_authority(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    cw_ownable::assert_owner(storage, sender).map_err(|e| match e {
        OwnershipError::NotOwner => ContractError::Unauthorized {},
        e => e.into(),
    })
}

pub fn fund_clearing_account(
    deps: DepsMut,
    info: MessageInfo,
    clearing_account: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = must_pay(&info, &config.denom)?;

    let balance = ledger::mint(deps.storage, &clearing_account, amount)?;

    Ok(Response::new()
        .add_attribute("action", "fund_clearing_account")
        .add_attribute("clearing_account", clearing_account)
        .add_attribute("amount", amount)
        .add_attribute("balance", balance))
}

pub fn update_distribution_schedule(
    deps: DepsMut,
    info: MessageInfo,
    schedule: Vec<ScheduledDistribution>,
) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &info.sender)?;

    let known_accounts = ledger::clearing_accounts(deps.storage)?;
    validate_schedule(&schedule, &known_accounts)?;

    if let (Some(first), Some(last_processed)) =
        (schedule.first(), LAST_PROCESSED.may_load(deps.storage)?)
    {
        if first.timestamp <= last_processed {
            return Err(ScheduleError::InvalidSchedule {
                msg: format!(
                    "timestamp {} does not come after processed period {}",
                    first.timestamp, last_processed
                ),
            }
            .into());
        }
    }

    let periods = u32::try_from(schedule.len()).map_err(|_| ScheduleError::InvalidSchedule {
        msg: format!("{} periods exceed the supported maximum", schedule.len()),
    })?;

    queue::replace(deps.storage, &schedule)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.periods = periods;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "update_distribution_schedule")
        .add_attribute("periods", periods.to_string()))
}

pub fn sweep_residuals(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &info.sender)?;

    if !queue::is_empty(deps.storage) {
        return Err(ContractError::ScheduleNotDrained {});
    }

    let config = CONFIG.load(deps.storage)?;
    let mut transfers = Transfers::default();
    let mut total = Uint128::zero();

    for (clearing_account, balance) in ledger::balances(deps.storage)? {
        if balance.is_zero() {
            continue;
        }

        ledger::debit(deps.storage, &clearing_account, balance)?;
        transfers.send_to_sink(&config.fallback_sink, balance)?;
        total = total.checked_add(balance)?;
    }

    Ok(Response::new()
        .add_attribute("action", "sweep_residuals")
        .add_attribute("amount", total)
        .add_messages(transfers.into_msgs(&config.denom)))
}
