use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_gov_migrations::params::{LegacyParams, Params};

#[cw_serde]
pub struct InstantiateMsg {
    /// Params in the v4 schema, written under the legacy params key.
    pub params: LegacyParams,
    /// An optional constitution. If not set, migrating to v5 sets
    /// the default.
    pub constitution: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replaces the constitution. Only callable by the authority, the
    /// instantiator of this contract.
    SetConstitution { constitution: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The params under the current params key, read with the v5
    /// schema. Fields introduced by v5 are empty before migration.
    #[returns(Params)]
    Params {},
    #[returns(Option<String>)]
    Constitution {},
}

#[cw_serde]
pub enum MigrateMsg {
    FromV4 {},
    FromCompatible {},
}
