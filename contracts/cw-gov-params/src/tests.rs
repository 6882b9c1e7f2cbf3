use cosmwasm_std::{
    attr,
    testing::{mock_dependencies, mock_env, mock_info},
    Addr, Empty, StdError, Storage, Uint128,
};
use cw_gov_migrations::{
    codec::{BinaryCodec, ProtoCodec},
    keys::{DEFAULT_CONSTITUTION, LEGACY_PARAMS_KEY},
    params::{default_params, Coin, Duration, LegacyParams, Params},
    MigrationError,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use crate::{
    contract::{execute, instantiate, migrate, query_params, CONTRACT_NAME, CONTRACT_VERSION},
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    ContractError,
};

const AUTHORITY: &str = "gov";
const OTHER: &str = "other";

fn gov_params_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

fn legacy_params() -> LegacyParams {
    LegacyParams {
        min_deposit: vec![Coin::new(Uint128::new(1_000_000), "ustake")],
        max_deposit_period: Some(Duration::from_seconds(172_800)),
        voting_period: Some(Duration::from_seconds(172_800)),
        quorum: "0.334000000000000000".to_string(),
        threshold: "0.500000000000000000".to_string(),
        veto_threshold: "0.334000000000000000".to_string(),
        min_initial_deposit_ratio: "0.000000000000000000".to_string(),
        burn_vote_quorum: false,
        burn_proposal_deposit_prevote: false,
        burn_vote_veto: true,
    }
}

fn setup_test_case(app: &mut App, constitution: Option<String>) -> (u64, Addr) {
    let code_id = app.store_code(gov_params_contract());
    let addr = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(AUTHORITY),
            &InstantiateMsg {
                params: legacy_params(),
                constitution,
            },
            &[],
            "gov params",
            Some(AUTHORITY.to_string()),
        )
        .unwrap();
    (code_id, addr)
}

fn migrate_from_v4(app: &mut App, code_id: u64, addr: &Addr) {
    app.migrate_contract(
        Addr::unchecked(AUTHORITY),
        addr.clone(),
        &MigrateMsg::FromV4 {},
        code_id,
    )
    .unwrap();
}

fn query_constitution(app: &App, addr: &Addr) -> Option<String> {
    app.wrap()
        .query_wasm_smart(addr, &QueryMsg::Constitution {})
        .unwrap()
}

#[test]
fn test_instantiate_writes_legacy_params() {
    let mut deps = mock_dependencies();
    let res = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: legacy_params(),
            constitution: None,
        },
    )
    .unwrap();
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "instantiate"),
            attr("authority", AUTHORITY),
            attr("constitution_set", "false"),
        ]
    );

    let stored: LegacyParams = ProtoCodec
        .unmarshal(&deps.storage.get(LEGACY_PARAMS_KEY).unwrap())
        .unwrap();
    assert_eq!(stored, legacy_params());

    // before migration the v5 fields read as empty.
    let params = query_params(deps.as_ref()).unwrap();
    assert_eq!(params.quorum, legacy_params().quorum);
    assert_eq!(params.expedited_threshold, "");
    assert_eq!(params.expedited_voting_period, None);
    assert!(params.expedited_min_deposit.is_empty());
}

#[test]
fn test_instantiate_empty_params() {
    let mut deps = mock_dependencies();
    let err = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: LegacyParams::default(),
            constitution: None,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ContractError::Std(StdError::generic_err("empty value for key 0x30"))
    );
    assert_eq!(deps.storage.get(LEGACY_PARAMS_KEY), None);
}

#[test]
fn test_migrate_from_v4() {
    let mut app = App::default();
    let (code_id, addr) = setup_test_case(&mut app, None);

    assert_eq!(query_constitution(&app, &addr), None);

    migrate_from_v4(&mut app, code_id, &addr);

    let params: Params = app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::Params {})
        .unwrap();
    let defaults = default_params();
    let legacy = legacy_params();

    assert_eq!(params.min_deposit, legacy.min_deposit);
    assert_eq!(params.voting_period, legacy.voting_period);
    assert_eq!(params.quorum, legacy.quorum);
    assert_eq!(params.expedited_min_deposit, defaults.expedited_min_deposit);
    assert_eq!(
        params.expedited_voting_period,
        defaults.expedited_voting_period
    );
    assert_eq!(params.expedited_threshold, defaults.expedited_threshold);
    assert_eq!(params.proposal_cancel_ratio, defaults.proposal_cancel_ratio);
    assert_eq!(params.proposal_cancel_dest, defaults.proposal_cancel_dest);
    assert_eq!(params.min_deposit_ratio, defaults.min_deposit_ratio);

    assert_eq!(
        query_constitution(&app, &addr),
        Some(DEFAULT_CONSTITUTION.to_string())
    );
}

#[test]
fn test_migrate_preserves_constitution() {
    let mut app = App::default();
    let (code_id, addr) = setup_test_case(&mut app, Some("We the nodes...".to_string()));

    migrate_from_v4(&mut app, code_id, &addr);

    assert_eq!(
        query_constitution(&app, &addr),
        Some("We the nodes...".to_string())
    );
}

#[test]
fn test_set_constitution_and_migrate_twice() {
    let mut app = App::default();
    let (code_id, addr) = setup_test_case(&mut app, None);

    migrate_from_v4(&mut app, code_id, &addr);
    let params: Params = app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::Params {})
        .unwrap();

    app.execute_contract(
        Addr::unchecked(AUTHORITY),
        addr.clone(),
        &ExecuteMsg::SetConstitution {
            constitution: "We the nodes...".to_string(),
        },
        &[],
    )
    .unwrap();

    migrate_from_v4(&mut app, code_id, &addr);

    let again: Params = app
        .wrap()
        .query_wasm_smart(&addr, &QueryMsg::Params {})
        .unwrap();
    assert_eq!(again, params);
    assert_eq!(
        query_constitution(&app, &addr),
        Some("We the nodes...".to_string())
    );
}

#[test]
fn test_set_constitution_unauthorized() {
    let mut app = App::default();
    let (_, addr) = setup_test_case(&mut app, None);

    let err: ContractError = app
        .execute_contract(
            Addr::unchecked(OTHER),
            addr.clone(),
            &ExecuteMsg::SetConstitution {
                constitution: "All power to the validators.".to_string(),
            },
            &[],
        )
        .unwrap_err()
        .downcast()
        .unwrap();

    assert_eq!(err, ContractError::Unauthorized {});
    assert_eq!(query_constitution(&app, &addr), None);
}

#[test]
fn test_migrate_attributes() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: legacy_params(),
            constitution: None,
        },
    )
    .unwrap();

    let res = migrate(deps.as_mut(), mock_env(), MigrateMsg::FromV4 {}).unwrap();
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "migrate"),
            attr("from", "v4"),
            attr("constitution", "initialized"),
        ]
    );

    let res = migrate(deps.as_mut(), mock_env(), MigrateMsg::FromV4 {}).unwrap();
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "migrate"),
            attr("from", "v4"),
            attr("constitution", "preserved"),
        ]
    );
}

#[test]
fn test_migrate_malformed_params() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: legacy_params(),
            constitution: None,
        },
    )
    .unwrap();
    deps.storage.set(LEGACY_PARAMS_KEY, &[0x0a, 0x05, 0x61]);

    let err = migrate(deps.as_mut(), mock_env(), MigrateMsg::FromV4 {}).unwrap_err();

    assert!(matches!(
        err,
        ContractError::Migration(MigrationError::DecodeParams(StdError::ParseErr { .. }))
    ));
}

#[test]
fn test_migrate_from_compatible() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: legacy_params(),
            constitution: None,
        },
    )
    .unwrap();
    let before = deps.storage.get(LEGACY_PARAMS_KEY);

    migrate(deps.as_mut(), mock_env(), MigrateMsg::FromCompatible {}).unwrap();

    assert_eq!(deps.storage.get(LEGACY_PARAMS_KEY), before);
}

#[test]
fn test_set_constitution_attributes() {
    let mut deps = mock_dependencies();
    instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        InstantiateMsg {
            params: legacy_params(),
            constitution: None,
        },
    )
    .unwrap();

    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(AUTHORITY, &[]),
        ExecuteMsg::SetConstitution {
            constitution: "We the nodes...".to_string(),
        },
    )
    .unwrap();
    assert_eq!(res.attributes, vec![attr("action", "set_constitution")]);
}

#[test]
pub fn test_migrate_update_version() {
    let mut deps = mock_dependencies();
    cw2::set_contract_version(&mut deps.storage, "my-contract", "1.0.0").unwrap();
    migrate(deps.as_mut(), mock_env(), MigrateMsg::FromCompatible {}).unwrap();
    let version = cw2::get_contract_version(&deps.storage).unwrap();
    assert_eq!(version.version, CONTRACT_VERSION);
    assert_eq!(version.contract, CONTRACT_NAME);
}
