use cosmwasm_std::{
    coins,
    testing::{mock_dependencies, mock_env, mock_info},
    Addr, BankMsg, CosmosMsg, DistributionMsg, Timestamp, Uint128,
};
use pse_interface::{
    mapping::FallbackSink,
    msg::{InstantiateMsg, MigrateMsg},
};

use crate::{
    contract::{instantiate, migrate},
    distribute::{plan_next, process_next, Transfers},
    tests::app::{allocation, DENOM, START},
};

fn community_pool_msg(amount: u128) -> CosmosMsg {
    DistributionMsg::FundCommunityPool {
        amount: coins(amount, DENOM),
    }
    .into()
}

#[test]
fn test_transfers_are_merged_per_destination() {
    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");
    let mut transfers = Transfers::default();

    transfers.send(&bob, Uint128::new(5)).unwrap();
    transfers.send(&alice, Uint128::new(3)).unwrap();
    transfers.send(&bob, Uint128::zero()).unwrap();
    transfers
        .send_to_sink(&FallbackSink::Account { addr: bob.clone() }, Uint128::new(2))
        .unwrap();
    transfers
        .send_to_sink(&FallbackSink::CommunityPool {}, Uint128::new(4))
        .unwrap();
    transfers
        .send_to_sink(&FallbackSink::CommunityPool {}, Uint128::new(1))
        .unwrap();

    assert_eq!(
        transfers.into_msgs(DENOM),
        vec![
            BankMsg::Send {
                to_address: "alice".to_string(),
                amount: coins(3, DENOM),
            }
            .into(),
            BankMsg::Send {
                to_address: "bob".to_string(),
                amount: coins(7, DENOM),
            }
            .into(),
            community_pool_msg(5),
        ]
    );
    assert!(Transfers::default().into_msgs(DENOM).is_empty());
}

#[test]
fn test_community_pool_receives_dust_and_unmapped_payouts() {
    let mut deps = mock_dependencies();
    let mut env = mock_env();

    let response = instantiate(
        deps.as_mut(),
        env.clone(),
        mock_info("funder", &coins(1001, DENOM)),
        InstantiateMsg {
            authority: "authority".to_string(),
            denom: DENOM.to_string(),
            allocations: vec![allocation("a", "0.5"), allocation("b", "0.5")],
            total_amount: Uint128::new(1001),
            start_time: START,
            periods: Some(10),
            fallback_sink: FallbackSink::CommunityPool {},
            mappings: vec![],
        },
    )
    .unwrap();
    assert_eq!(
        response
            .messages
            .into_iter()
            .map(|x| x.msg)
            .collect::<Vec<_>>(),
        vec![community_pool_msg(1)]
    );

    env.block.time = Timestamp::from_seconds(START);
    let plan = plan_next(deps.as_ref(), START).unwrap().unwrap();
    assert_eq!(plan.scheduled_time, START);
    assert!(plan.payouts.iter().all(|payout| payout.diverted));

    let response = process_next(deps.as_mut(), &env).unwrap();
    assert_eq!(
        response
            .messages
            .into_iter()
            .map(|x| x.msg)
            .collect::<Vec<_>>(),
        vec![community_pool_msg(100)]
    );
    assert_eq!(
        response
            .events
            .iter()
            .filter(|event| event.ty == "distribution_completed")
            .count(),
        2
    );
}

#[test]
fn test_nothing_planned_before_due() {
    let mut deps = mock_dependencies();

    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info("funder", &coins(1000, DENOM)),
        InstantiateMsg {
            authority: "authority".to_string(),
            denom: DENOM.to_string(),
            allocations: vec![allocation("a", "1")],
            total_amount: Uint128::new(1000),
            start_time: START,
            periods: Some(10),
            fallback_sink: FallbackSink::CommunityPool {},
            mappings: vec![],
        },
    )
    .unwrap();

    assert_eq!(plan_next(deps.as_ref(), START - 1).unwrap(), None);
}

#[test]
fn test_migrate_from_same_version() {
    let mut deps = mock_dependencies();

    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info("funder", &coins(1000, DENOM)),
        InstantiateMsg {
            authority: "authority".to_string(),
            denom: DENOM.to_string(),
            allocations: vec![allocation("a", "1")],
            total_amount: Uint128::new(1000),
            start_time: START,
            periods: Some(10),
            fallback_sink: FallbackSink::CommunityPool {},
            mappings: vec![],
        },
    )
    .unwrap();

    assert!(migrate(deps.as_mut(), mock_env(), MigrateMsg::FromCompatible {}).is_ok());
}
