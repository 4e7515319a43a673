#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{ensure_from_older_version, set_contract_version};
use cw_utils::must_pay;
use pse_interface::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg};
use pse_schedule::{validate_and_build_schedule, ScheduleError, DEFAULT_DISTRIBUTION_PERIODS};

use crate::{
    distribute::{self, Transfers},
    execute, ledger, mapping, query, queue,
    state::{Config, CONFIG},
    ContractError,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:pse-distributor";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(msg.authority.as_str()))?;

    let paid = must_pay(&info, &msg.denom)?;
    if paid != msg.total_amount {
        return Err(ContractError::InvalidFunding {
            msg: format!("expected {}{}, received {}", msg.total_amount, msg.denom, paid),
        });
    }

    let periods = msg.periods.unwrap_or(DEFAULT_DISTRIBUTION_PERIODS);
    let schedule =
        validate_and_build_schedule(&msg.allocations, msg.total_amount, msg.start_time, periods)?;
    let fallback_sink = msg.fallback_sink.into_checked(deps.as_ref())?;

    // Each clearing account holds its full share; the truncation dust of the split goes to the sink
    let mut credited = Uint128::zero();
    for allocation in msg.allocations.iter() {
        let amount = msg
            .total_amount
            .checked_mul_floor(allocation.percentage)
            .map_err(ScheduleError::from)?;
        ledger::open(deps.storage, &allocation.clearing_account, amount)?;
        credited = credited.checked_add(amount)?;
    }
    let dust = msg.total_amount.checked_sub(credited)?;

    queue::append(deps.storage, &schedule)?;

    let mappings = mapping::validate_mappings(deps.as_ref(), &msg.mappings)?;
    mapping::save_mappings(deps.storage, &mappings)?;

    let mut transfers = Transfers::default();
    transfers.send_to_sink(&fallback_sink, dust)?;

    CONFIG.save(
        deps.storage,
        &Config {
            denom: msg.denom.clone(),
            fallback_sink,
            periods,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("denom", &msg.denom)
        .add_attribute("total_amount", msg.total_amount)
        .add_attribute("periods", periods.to_string())
        .add_attribute("start_time", msg.start_time.to_string())
        .add_attribute("dust", dust)
        .add_messages(transfers.into_msgs(&msg.denom)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateClearingAccountMappings { mappings } => {
            mapping::update_mappings(deps, info, mappings)
        }
        ExecuteMsg::ProcessNext {} => distribute::process_next(deps, &env),
        ExecuteMsg::FundClearingAccount { clearing_account } => {
            execute::fund_clearing_account(deps, info, clearing_account)
        }
        ExecuteMsg::UpdateDistributionSchedule { schedule } => {
            execute::update_distribution_schedule(deps, info, schedule)
        }
        ExecuteMsg::SweepResiduals {} => execute::sweep_residuals(deps, info),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;

            Ok(Response::new().add_attributes(ownership.into_attributes()))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::BeginBlock {} => distribute::begin_block(deps, &env),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::config(deps)?),
        QueryMsg::Schedule { start_after, limit } => {
            to_json_binary(&queue::iterate(deps.storage, start_after, limit)?)
        }
        QueryMsg::NextDistribution {} => to_json_binary(&queue::peek_earliest(deps.storage)?),
        QueryMsg::PendingDistributions { start_after, limit } => {
            to_json_binary(&query::pending_distributions(deps, env, start_after, limit)?)
        }
        QueryMsg::ClearingAccountMappings {} => {
            to_json_binary(&mapping::get_mappings(deps.storage)?)
        }
        QueryMsg::ClearingAccountMapping { clearing_account } => {
            to_json_binary(&mapping::get_mapping(deps.storage, clearing_account)?)
        }
        QueryMsg::ClearingAccountBalances {} => {
            to_json_binary(&query::clearing_account_balances(deps)?)
        }
        QueryMsg::CompletedDistributions {
            clearing_account,
            start_after,
            limit,
        } => to_json_binary(&query::completed_distributions(
            deps,
            clearing_account,
            start_after,
            limit,
        )?),
        QueryMsg::PreviewSchedule {
            allocations,
            total_amount,
            start_time,
            periods,
        } => to_json_binary(&query::preview_schedule(
            allocations,
            total_amount,
            start_time,
            periods,
        )?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default())
}
