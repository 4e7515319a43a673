use cosmwasm_std::Uint128;

use super::allocation;
use crate::{
    generate_schedule, schedule_totals, validate_and_build_schedule, validate_schedule,
    ClearingAccountAllocation, ScheduleError, ScheduledDistribution,
    DEFAULT_DISTRIBUTION_PERIODS,
};

// 2025-01-15 12:00:00 UTC
const START: u64 = 1736942400;

fn known_accounts() -> Vec<String> {
    vec!["a".to_string(), "b".to_string()]
}

fn period(timestamp: u64, amounts: &[(&str, u128)]) -> ScheduledDistribution {
    ScheduledDistribution {
        timestamp,
        allocations: amounts
            .iter()
            .map(|(clearing_account, amount)| ClearingAccountAllocation {
                clearing_account: clearing_account.to_string(),
                amount: Uint128::new(*amount),
            })
            .collect(),
    }
}

#[test]
fn test_even_split() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.4")];

    let schedule = generate_schedule(&allocations, Uint128::new(1000), START, 10).unwrap();

    assert_eq!(schedule.len(), 10);
    for distribution in schedule.iter() {
        assert_eq!(
            distribution.allocations,
            vec![
                ClearingAccountAllocation {
                    clearing_account: "a".to_string(),
                    amount: Uint128::new(60),
                },
                ClearingAccountAllocation {
                    clearing_account: "b".to_string(),
                    amount: Uint128::new(40),
                },
            ]
        );
    }

    let totals = schedule_totals(&schedule).unwrap();
    assert_eq!(totals.get("a"), Some(&Uint128::new(600)));
    assert_eq!(totals.get("b"), Some(&Uint128::new(400)));
}

#[test]
fn test_truncation_shortfall() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.4")];
    let total_amount = Uint128::new(1005);
    let periods = 10u32;

    let schedule = generate_schedule(&allocations, total_amount, START, periods).unwrap();

    // floor(0.6 * 1005) = 603, 603 / 10 = 60
    assert_eq!(schedule[0].allocations[0].amount, Uint128::new(60));
    // floor(0.4 * 1005) = 402, 402 / 10 = 40
    assert_eq!(schedule[0].allocations[1].amount, Uint128::new(40));

    let totals = schedule_totals(&schedule).unwrap();
    for allocation in allocations.iter() {
        let total_balance = total_amount.mul_floor(allocation.percentage);
        let scheduled = totals[&allocation.clearing_account];
        assert_eq!(
            total_balance - scheduled,
            total_balance % Uint128::from(periods)
        );
    }
    assert_eq!(Uint128::new(603) - totals["a"], Uint128::new(3));
}

#[test]
fn test_timestamps_are_monthly_and_ascending() {
    let allocations = vec![allocation("a", "1")];

    let schedule = generate_schedule(
        &allocations,
        Uint128::new(1_000_000),
        START,
        DEFAULT_DISTRIBUTION_PERIODS,
    )
    .unwrap();

    assert_eq!(schedule.len(), 84);
    assert_eq!(schedule[0].timestamp, START);
    // 2025-02-15 12:00:00
    assert_eq!(schedule[1].timestamp, 1739620800);
    // 2031-12-15 12:00:00
    assert_eq!(schedule[83].timestamp, 1955102400);
    assert!(schedule
        .windows(2)
        .all(|pair| pair[0].timestamp < pair[1].timestamp));
}

#[test]
fn test_generation_is_deterministic() {
    let allocations = vec![
        allocation("a", "0.35"),
        allocation("b", "0.45"),
        allocation("c", "0.2"),
    ];

    let first = generate_schedule(&allocations, Uint128::new(987_654_321), START, 84).unwrap();
    let second = generate_schedule(&allocations, Uint128::new(987_654_321), START, 84).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_allocation_too_small() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.4")];

    // floor(0.4 * 20) = 8, 8 / 10 = 0
    let err = generate_schedule(&allocations, Uint128::new(20), START, 10).unwrap_err();

    assert_eq!(
        err,
        ScheduleError::AllocationTooSmall {
            clearing_account: "b".to_string()
        }
    );
}

#[test]
fn test_no_allocations() {
    let err = generate_schedule(&[], Uint128::new(1000), START, 10).unwrap_err();

    assert_eq!(err, ScheduleError::NoAllocations {});
}

#[test]
fn test_zero_periods() {
    let allocations = vec![allocation("a", "1")];

    let err = generate_schedule(&allocations, Uint128::new(1000), START, 0).unwrap_err();

    assert_eq!(err, ScheduleError::ZeroPeriods {});
}

#[test]
fn test_build_rejects_invalid_allocations() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.3")];

    let err =
        validate_and_build_schedule(&allocations, Uint128::new(1000), START, 10).unwrap_err();

    assert!(matches!(err, ScheduleError::InvalidAllocation { .. }));
}

#[test]
fn test_build_matches_generate() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.4")];

    assert_eq!(
        validate_and_build_schedule(&allocations, Uint128::new(1000), START, 10),
        generate_schedule(&allocations, Uint128::new(1000), START, 10)
    );
}

#[test]
fn test_validate_schedule_accepts_generated() {
    let allocations = vec![allocation("a", "0.6"), allocation("b", "0.4")];
    let schedule = generate_schedule(&allocations, Uint128::new(1000), START, 10).unwrap();

    assert_eq!(validate_schedule(&schedule, &known_accounts()), Ok(()));
    assert_eq!(validate_schedule(&[], &known_accounts()), Ok(()));
}

#[test]
fn test_validate_schedule_rejections() {
    let cases = vec![
        (vec![period(0, &[("a", 1)])], "timestamp cannot be zero"),
        (vec![period(START, &[])], "no allocations"),
        (vec![period(START, &[("", 1)])], "empty clearing account name"),
        (vec![period(START, &[("z", 1)])], "unknown clearing account z"),
        (vec![period(START, &[("a", 0)])], "zero amount for a"),
        (
            vec![period(START, &[("a", 1), ("a", 2)])],
            "duplicate clearing account a",
        ),
        (
            vec![period(START, &[("a", 1)]), period(START, &[("b", 1)])],
            "does not come after",
        ),
        (
            vec![period(START + 10, &[("a", 1)]), period(START, &[("b", 1)])],
            "does not come after",
        ),
    ];

    for (schedule, expected) in cases {
        let err = validate_schedule(&schedule, &known_accounts()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidSchedule { .. }));
        assert!(
            err.to_string().contains(expected),
            "{} does not contain {}",
            err,
            expected
        );
    }
}

#[test]
fn test_total_amount() {
    let distribution = period(START, &[("a", 60), ("b", 40)]);

    assert_eq!(distribution.total_amount().unwrap(), Uint128::new(100));
}
