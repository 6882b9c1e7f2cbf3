//! Parameter records of the governance module, before and after the
//! v5 schema change, and the default parameter set.
//!
//! see https://github.com/cosmos/cosmos-sdk/blob/v0.50.1/proto/cosmos/gov/v1/gov.proto

use cosmwasm_std::{Decimal, Uint128};

/// Coin defines a token with a denomination and an amount.
#[derive(
    Clone,
    PartialEq,
    Eq,
    ::prost::Message,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

/// A signed span of time, `google.protobuf.Duration` on the wire.
#[derive(
    Clone,
    PartialEq,
    Eq,
    ::prost::Message,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

/// Params as stored by v4 of the module. Decimal fields are strings
/// with 18 fractional digits.
#[derive(
    Clone,
    PartialEq,
    Eq,
    ::prost::Message,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct LegacyParams {
    /// Minimum deposit for a proposal to enter voting period.
    #[prost(message, repeated, tag = "1")]
    pub min_deposit: ::prost::alloc::vec::Vec<Coin>,
    /// Maximum period for Atom holders to deposit on a proposal.
    #[prost(message, optional, tag = "2")]
    pub max_deposit_period: ::core::option::Option<Duration>,
    /// Duration of the voting period.
    #[prost(message, optional, tag = "3")]
    pub voting_period: ::core::option::Option<Duration>,
    /// Minimum percentage of total stake needed to vote for a result
    /// to be considered valid.
    #[prost(string, tag = "4")]
    pub quorum: ::prost::alloc::string::String,
    /// Minimum proportion of Yes votes for proposal to pass.
    #[prost(string, tag = "5")]
    pub threshold: ::prost::alloc::string::String,
    /// Minimum value of Veto votes to Total votes ratio for proposal to
    /// be vetoed.
    #[prost(string, tag = "6")]
    pub veto_threshold: ::prost::alloc::string::String,
    /// The ratio representing the proportion of the deposit value that
    /// must be paid at proposal submission.
    #[prost(string, tag = "7")]
    pub min_initial_deposit_ratio: ::prost::alloc::string::String,
    #[prost(bool, tag = "13")]
    pub burn_vote_quorum: bool,
    #[prost(bool, tag = "14")]
    pub burn_proposal_deposit_prevote: bool,
    #[prost(bool, tag = "15")]
    pub burn_vote_veto: bool,
}

/// Params as stored by v5 of the module. A superset of
/// [`LegacyParams`]; tags 8 through 12 and 16 are new.
#[derive(
    Clone,
    PartialEq,
    Eq,
    ::prost::Message,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct Params {
    #[prost(message, repeated, tag = "1")]
    pub min_deposit: ::prost::alloc::vec::Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub max_deposit_period: ::core::option::Option<Duration>,
    #[prost(message, optional, tag = "3")]
    pub voting_period: ::core::option::Option<Duration>,
    #[prost(string, tag = "4")]
    pub quorum: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub threshold: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub veto_threshold: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub min_initial_deposit_ratio: ::prost::alloc::string::String,
    /// The cancel ratio which will not be returned back to the
    /// depositors when a proposal is cancelled.
    #[prost(string, tag = "8")]
    pub proposal_cancel_ratio: ::prost::alloc::string::String,
    /// The address which will receive (proposal_cancel_ratio *
    /// deposit) proposal deposits. If empty, the deposits are burned.
    #[prost(string, tag = "9")]
    pub proposal_cancel_dest: ::prost::alloc::string::String,
    /// Duration of the voting period of an expedited proposal.
    #[prost(message, optional, tag = "10")]
    pub expedited_voting_period: ::core::option::Option<Duration>,
    /// Minimum proportion of Yes votes for an expedited proposal to
    /// pass.
    #[prost(string, tag = "11")]
    pub expedited_threshold: ::prost::alloc::string::String,
    /// Minimum expedited deposit for a proposal to enter voting
    /// period.
    #[prost(message, repeated, tag = "12")]
    pub expedited_min_deposit: ::prost::alloc::vec::Vec<Coin>,
    #[prost(bool, tag = "13")]
    pub burn_vote_quorum: bool,
    #[prost(bool, tag = "14")]
    pub burn_proposal_deposit_prevote: bool,
    #[prost(bool, tag = "15")]
    pub burn_vote_veto: bool,
    /// The minimum percentage of the deposit a single deposit must
    /// provide for it to be accepted.
    #[prost(string, tag = "16")]
    pub min_deposit_ratio: ::prost::alloc::string::String,
}

pub const DEFAULT_BOND_DENOM: &str = "stake";
pub const DEFAULT_MIN_DEPOSIT_TOKENS: Uint128 = Uint128::new(10_000_000);
pub const DEFAULT_MIN_EXPEDITED_DEPOSIT_TOKENS: Uint128 = Uint128::new(50_000_000);
/// Two days.
pub const DEFAULT_PERIOD_SECONDS: i64 = 172_800;
/// One day.
pub const DEFAULT_EXPEDITED_PERIOD_SECONDS: i64 = 86_400;

impl Coin {
    pub fn new(amount: Uint128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.to_string(),
        }
    }
}

impl Duration {
    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

/// Renders a decimal the way the chain stores it: an integer part
/// followed by exactly 18 fractional digits.
pub fn legacy_dec_string(d: Decimal) -> String {
    let atomics = d.atomics();
    let one = Decimal::one().atomics();
    format!("{}.{:0>18}", atomics / one, (atomics % one).to_string())
}

/// The module's default parameters. Migrations take the values of
/// newly introduced fields from here.
pub fn default_params() -> Params {
    Params {
        min_deposit: vec![Coin::new(DEFAULT_MIN_DEPOSIT_TOKENS, DEFAULT_BOND_DENOM)],
        max_deposit_period: Some(Duration::from_seconds(DEFAULT_PERIOD_SECONDS)),
        voting_period: Some(Duration::from_seconds(DEFAULT_PERIOD_SECONDS)),
        quorum: legacy_dec_string(Decimal::permille(334)),
        threshold: legacy_dec_string(Decimal::percent(50)),
        veto_threshold: legacy_dec_string(Decimal::permille(334)),
        min_initial_deposit_ratio: legacy_dec_string(Decimal::zero()),
        proposal_cancel_ratio: legacy_dec_string(Decimal::percent(50)),
        proposal_cancel_dest: String::new(),
        expedited_voting_period: Some(Duration::from_seconds(
            DEFAULT_EXPEDITED_PERIOD_SECONDS,
        )),
        expedited_threshold: legacy_dec_string(Decimal::permille(667)),
        expedited_min_deposit: vec![Coin::new(
            DEFAULT_MIN_EXPEDITED_DEPOSIT_TOKENS,
            DEFAULT_BOND_DENOM,
        )],
        burn_vote_quorum: false,
        burn_proposal_deposit_prevote: false,
        burn_vote_veto: true,
        min_deposit_ratio: legacy_dec_string(Decimal::percent(1)),
    }
}
