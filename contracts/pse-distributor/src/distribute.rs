use std::collections::BTreeMap;

use cosmwasm_std::{
    coins, Addr, BankMsg, CosmosMsg, Deps, DepsMut, DistributionMsg, Env, Event, OverflowError,
    Response, StdError, Uint128,
};
use itertools::Itertools;
use pse_interface::{distribution::CompletedDistribution, mapping::FallbackSink};

use crate::{
    ledger,
    mapping::recipients_of,
    queue,
    state::{completed_distributions, CONFIG, LAST_PROCESSED},
    ContractError,
};

/// Outgoing funds merged per destination.
#[derive(Debug, Default, PartialEq)]
pub struct Transfers {
    accounts: BTreeMap<Addr, Uint128>,
    community_pool: Uint128,
}

impl Transfers {
    pub fn send(&mut self, addr: &Addr, amount: Uint128) -> Result<(), OverflowError> {
        if amount.is_zero() {
            return Ok(());
        }

        let total = self.accounts.entry(addr.clone()).or_default();
        *total = total.checked_add(amount)?;

        Ok(())
    }

    pub fn send_to_sink(
        &mut self,
        sink: &FallbackSink<Addr>,
        amount: Uint128,
    ) -> Result<(), OverflowError> {
        match sink {
            FallbackSink::CommunityPool {} => {
                self.community_pool = self.community_pool.checked_add(amount)?;
                Ok(())
            }
            FallbackSink::Account { addr } => self.send(addr, amount),
        }
    }

    pub fn into_msgs(self, denom: &str) -> Vec<CosmosMsg> {
        let mut msgs: Vec<CosmosMsg> = self
            .accounts
            .into_iter()
            .map(|(addr, amount)| {
                BankMsg::Send {
                    to_address: addr.to_string(),
                    amount: coins(amount.u128(), denom),
                }
                .into()
            })
            .collect();

        if !self.community_pool.is_zero() {
            msgs.push(
                DistributionMsg::FundCommunityPool {
                    amount: coins(self.community_pool.u128(), denom),
                }
                .into(),
            );
        }

        msgs
    }
}

/// Everything a due period will change, computed before any write.
#[derive(Debug, PartialEq)]
pub struct DistributionPlan {
    pub scheduled_time: u64,
    pub denom: String,
    pub debits: BTreeMap<String, Uint128>,
    pub payouts: Vec<Payout>,
    pub transfers: Transfers,
}

#[derive(Debug, PartialEq)]
pub struct Payout {
    pub clearing_account: String,
    pub recipients: Vec<Addr>,
    pub amount: Uint128,
    pub per_recipient: Uint128,
    pub to_fallback_sink: Uint128,
    pub diverted: bool,
}

/// Returns the plan for the earliest period, or `None` if nothing is due at `now`.
pub fn plan_next(deps: Deps, now: u64) -> Result<Option<DistributionPlan>, ContractError> {
    let head = match queue::peek_earliest(deps.storage)? {
        Some(head) if head.timestamp <= now => head,
        _ => return Ok(None),
    };
    let config = CONFIG.load(deps.storage)?;

    let mut debits: BTreeMap<String, Uint128> = BTreeMap::new();
    let mut transfers = Transfers::default();
    let mut payouts = Vec::with_capacity(head.allocations.len());

    for allocation in head.allocations {
        let pending = debits
            .entry(allocation.clearing_account.clone())
            .or_default();
        let required = pending.checked_add(allocation.amount)?;
        ledger::ensure_available(deps.storage, &allocation.clearing_account, required)?;
        *pending = required;

        let recipients = recipients_of(deps.storage, &allocation.clearing_account)?;
        let payout = if recipients.is_empty() {
            transfers.send_to_sink(&config.fallback_sink, allocation.amount)?;

            Payout {
                clearing_account: allocation.clearing_account,
                recipients,
                amount: allocation.amount,
                per_recipient: Uint128::zero(),
                to_fallback_sink: allocation.amount,
                diverted: true,
            }
        } else {
            let count = Uint128::from(recipients.len() as u128);
            let per_recipient = allocation
                .amount
                .checked_div(count)
                .map_err(StdError::from)?;
            let remainder = allocation
                .amount
                .checked_rem(count)
                .map_err(StdError::from)?;

            for recipient in recipients.iter() {
                transfers.send(recipient, per_recipient)?;
            }
            transfers.send_to_sink(&config.fallback_sink, remainder)?;

            Payout {
                clearing_account: allocation.clearing_account,
                recipients,
                amount: allocation.amount,
                per_recipient,
                to_fallback_sink: remainder,
                diverted: false,
            }
        };

        payouts.push(payout);
    }

    Ok(Some(DistributionPlan {
        scheduled_time: head.timestamp,
        denom: config.denom,
        debits,
        payouts,
        transfers,
    }))
}

/// Writes a plan produced by [`plan_next`] and emits its transfers.
pub fn apply_plan(
    deps: DepsMut,
    env: &Env,
    plan: DistributionPlan,
) -> Result<Response, ContractError> {
    let actual_time = env.block.time.seconds();

    for (clearing_account, amount) in plan.debits.iter() {
        ledger::debit(deps.storage, clearing_account, *amount)?;
    }

    let mut events = Vec::with_capacity(plan.payouts.len());
    for payout in plan.payouts {
        let mut event = Event::new("distribution_completed")
            .add_attribute("clearing_account", &payout.clearing_account)
            .add_attribute("amount", payout.amount);
        // Empty attribute values are rejected by the host
        if !payout.recipients.is_empty() {
            event = event.add_attribute("recipients", payout.recipients.iter().join(","));
        }
        events.push(
            event
                .add_attribute("per_recipient", payout.per_recipient)
                .add_attribute("to_fallback_sink", payout.to_fallback_sink)
                .add_attribute("diverted", payout.diverted.to_string()),
        );

        completed_distributions().save(
            deps.storage,
            (plan.scheduled_time, payout.clearing_account.clone()),
            &CompletedDistribution {
                clearing_account: payout.clearing_account.clone(),
                recipients: payout.recipients,
                scheduled_time: plan.scheduled_time,
                actual_time,
                block_height: env.block.height,
                amount: payout.amount,
                per_recipient: payout.per_recipient,
                to_fallback_sink: payout.to_fallback_sink,
                diverted: payout.diverted,
            },
        )?;
    }

    queue::remove_earliest(deps.storage)?;
    LAST_PROCESSED.save(deps.storage, &plan.scheduled_time)?;

    Ok(Response::new()
        .add_attribute("action", "process_next")
        .add_attribute("status", "completed")
        .add_attribute("scheduled_time", plan.scheduled_time.to_string())
        .add_attribute("actual_time", actual_time.to_string())
        .add_events(events)
        .add_messages(plan.transfers.into_msgs(&plan.denom)))
}

fn idle() -> Response {
    Response::new()
        .add_attribute("action", "process_next")
        .add_attribute("status", "idle")
}

/// Processes at most one due period. Any failure leaves storage untouched.
pub fn process_next(deps: DepsMut, env: &Env) -> Result<Response, ContractError> {
    let plan = plan_next(deps.as_ref(), env.block.time.seconds())?;

    match plan {
        Some(plan) => apply_plan(deps, env, plan),
        None => Ok(idle()),
    }
}

/// Block hook variant of [`process_next`]: a failed plan is reported instead of aborting the block.
pub fn begin_block(deps: DepsMut, env: &Env) -> Result<Response, ContractError> {
    let plan = plan_next(deps.as_ref(), env.block.time.seconds());

    match plan {
        Ok(Some(plan)) => apply_plan(deps, env, plan),
        Ok(None) => Ok(idle()),
        Err(err) => Ok(Response::new()
            .add_attribute("action", "process_next")
            .add_attribute("status", "failed")
            .add_attribute("error", err.to_string())),
    }
}
