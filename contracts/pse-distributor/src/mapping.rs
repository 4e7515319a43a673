use std::collections::BTreeSet;

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage};
use pse_interface::mapping::ClearingAccountMapping;

use crate::{
    execute::assert_authority,
    state::{CLEARING_ACCOUNTS, RECIPIENT_MAPPINGS},
    ContractError,
};

/// Checks a full replacement set of mappings against the known clearing accounts.
pub fn validate_mappings(
    deps: Deps,
    mappings: &[ClearingAccountMapping<String>],
) -> Result<Vec<ClearingAccountMapping<Addr>>, ContractError> {
    let mut seen = BTreeSet::new();

    mappings
        .iter()
        .map(|mapping| {
            if !CLEARING_ACCOUNTS.has(deps.storage, &mapping.clearing_account) {
                return Err(ContractError::InvalidMapping {
                    msg: format!("unknown clearing account {}", mapping.clearing_account),
                });
            }
            if !seen.insert(mapping.clearing_account.as_str()) {
                return Err(ContractError::InvalidMapping {
                    msg: format!("clearing account {} mapped twice", mapping.clearing_account),
                });
            }
            if mapping.recipients.is_empty() {
                return Err(ContractError::InvalidMapping {
                    msg: format!("clearing account {} has no recipients", mapping.clearing_account),
                });
            }

            let checked = mapping.into_checked(deps)?;

            let mut recipients = BTreeSet::new();
            if let Some(duplicate) = checked.recipients.iter().find(|x| !recipients.insert(*x)) {
                return Err(ContractError::InvalidMapping {
                    msg: format!(
                        "recipient {} listed twice for clearing account {}",
                        duplicate, mapping.clearing_account
                    ),
                });
            }

            Ok(checked)
        })
        .collect()
}

/// Replaces the stored mappings wholesale.
pub fn save_mappings(
    storage: &mut dyn Storage,
    mappings: &[ClearingAccountMapping<Addr>],
) -> StdResult<()> {
    RECIPIENT_MAPPINGS.clear(storage);

    for mapping in mappings {
        RECIPIENT_MAPPINGS.save(storage, &mapping.clearing_account, &mapping.recipients)?;
    }

    Ok(())
}

pub fn update_mappings(
    deps: DepsMut,
    info: MessageInfo,
    mappings: Vec<ClearingAccountMapping<String>>,
) -> Result<Response, ContractError> {
    assert_authority(deps.storage, &info.sender)?;

    let mappings = validate_mappings(deps.as_ref(), &mappings)?;
    save_mappings(deps.storage, &mappings)?;

    Ok(Response::new()
        .add_attribute("action", "update_clearing_account_mappings")
        .add_attribute("mappings", mappings.len().to_string()))
}

pub fn get_mappings(storage: &dyn Storage) -> StdResult<Vec<ClearingAccountMapping<Addr>>> {
    RECIPIENT_MAPPINGS
        .range(storage, None, None, Order::Ascending)
        .map(|item| {
            let (clearing_account, recipients) = item?;

            Ok(ClearingAccountMapping {
                clearing_account,
                recipients,
            })
        })
        .collect()
}

pub fn get_mapping(
    storage: &dyn Storage,
    clearing_account: String,
) -> StdResult<Option<ClearingAccountMapping<Addr>>> {
    Ok(RECIPIENT_MAPPINGS
        .may_load(storage, &clearing_account)?
        .map(|recipients| ClearingAccountMapping {
            clearing_account,
            recipients,
        }))
}

/// Recipients for a clearing account, empty when it is unmapped.
pub fn recipients_of(storage: &dyn Storage, clearing_account: &str) -> StdResult<Vec<Addr>> {
    Ok(RECIPIENT_MAPPINGS
        .may_load(storage, clearing_account)?
        .unwrap_or_default())
}
