#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw_gov_migrations::{
    codec::{BinaryCodec, ProtoCodec},
    keys::{LEGACY_PARAMS_KEY, PARAMS_KEY},
    params::Params,
    store::KvStore,
    v5::{ConstitutionOutcome, V4_TO_V5},
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{AUTHORITY, CONSTITUTION};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-gov-params";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    AUTHORITY.save(deps.storage, &info.sender)?;

    // all-default params encode to nothing, which can not be stored.
    let params = ProtoCodec.marshal(&msg.params)?;
    KvStore::set(&mut *deps.storage, LEGACY_PARAMS_KEY, &params)?;

    if let Some(constitution) = &msg.constitution {
        CONSTITUTION.save(deps.storage, constitution)?;
    }

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("authority", info.sender)
        .add_attribute("constitution_set", msg.constitution.is_some().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetConstitution { constitution } => {
            execute_set_constitution(deps, info, constitution)
        }
    }
}

pub fn execute_set_constitution(
    deps: DepsMut,
    info: MessageInfo,
    constitution: String,
) -> Result<Response, ContractError> {
    if info.sender != AUTHORITY.load(deps.storage)? {
        return Err(ContractError::Unauthorized {});
    }
    CONSTITUTION.save(deps.storage, &constitution)?;

    Ok(Response::default().add_attribute("action", "set_constitution"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?),
        QueryMsg::Constitution {} => to_json_binary(&CONSTITUTION.may_load(deps.storage)?),
    }
}

pub fn query_params(deps: Deps) -> StdResult<Params> {
    let bz = KvStore::get(deps.storage, PARAMS_KEY)?;
    ProtoCodec.unmarshal(&bz)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    match msg {
        MigrateMsg::FromV4 {} => {
            let report = V4_TO_V5.migrate(deps.storage, &ProtoCodec, &CONSTITUTION)?;

            let response = Response::default()
                .add_attribute("action", "migrate")
                .add_attribute("from", "v4")
                .add_attribute("constitution", report.constitution.as_str());
            Ok(match report.constitution {
                ConstitutionOutcome::InitializedAfterCheckError { error } => {
                    response.add_attribute("constitution_check_error", error)
                }
                _ => response,
            })
        }
        MigrateMsg::FromCompatible {} => Ok(Response::default()
            .add_attribute("action", "migrate")
            .add_attribute("from", "compatible")),
    }
}
