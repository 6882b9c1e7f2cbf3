//! Migration from v4 to v5 of the governance module's store.
//!
//! - Adds the expedited proposal and proposal cancellation params,
//!   taking their values from [`default_params`].
//! - Sets the default constitution if none is set.

use crate::{
    codec::BinaryCodec,
    keys::{DEFAULT_CONSTITUTION, LEGACY_PARAMS_KEY, PARAMS_KEY},
    params::{default_params, LegacyParams, Params},
    store::{KvStore, Singleton},
    MigrationError,
};

/// The v4 to v5 migration over the module's store layout.
pub const V4_TO_V5: Migration<'static> =
    Migration::new(LEGACY_PARAMS_KEY, PARAMS_KEY, DEFAULT_CONSTITUTION);

/// What a migration did to the constitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstitutionOutcome {
    /// A constitution was already set and has been left as-is.
    Preserved,
    /// No constitution was set. The default has been written.
    Initialized,
    /// Checking for an existing constitution failed. The default has
    /// been written.
    InitializedAfterCheckError { error: String },
}

impl ConstitutionOutcome {
    /// Short name used in event attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstitutionOutcome::Preserved => "preserved",
            ConstitutionOutcome::Initialized => "initialized",
            ConstitutionOutcome::InitializedAfterCheckError { .. } => {
                "initialized_after_check_error"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MigrationReport {
    pub constitution: ConstitutionOutcome,
}

pub struct Migration<'a> {
    legacy_params_key: &'a [u8],
    params_key: &'a [u8],
    default_constitution: &'a str,
}

impl<'a> Migration<'a> {
    pub const fn new(
        legacy_params_key: &'a [u8],
        params_key: &'a [u8],
        default_constitution: &'a str,
    ) -> Self {
        Self {
            legacy_params_key,
            params_key,
            default_constitution,
        }
    }

    /// Rewrites the params under the legacy key to the v5 schema under
    /// the current key, then sets the default constitution if one is
    /// not set.
    ///
    /// Errors are returned as soon as they occur. The store is not
    /// written to if the legacy params can not be loaded, but the
    /// caller is responsible for discarding writes made before a later
    /// failure.
    pub fn migrate<S, C, I>(
        &self,
        store: &mut S,
        cdc: &C,
        constitution: &I,
    ) -> Result<MigrationReport, MigrationError>
    where
        S: KvStore + ?Sized,
        C: BinaryCodec,
        I: Singleton<S, String>,
    {
        let bz = store
            .get(self.legacy_params_key)
            .map_err(MigrationError::ReadParams)?;
        let legacy: LegacyParams = cdc.unmarshal(&bz).map_err(MigrationError::DecodeParams)?;

        let params = upgrade_params(legacy, default_params());

        let bz = cdc.marshal(&params).map_err(MigrationError::EncodeParams)?;
        store
            .set(self.params_key, &bz)
            .map_err(MigrationError::WriteParams)?;

        let outcome = match constitution.has(store) {
            Ok(true) => ConstitutionOutcome::Preserved,
            Ok(false) => ConstitutionOutcome::Initialized,
            Err(e) => ConstitutionOutcome::InitializedAfterCheckError {
                error: e.to_string(),
            },
        };
        if outcome != ConstitutionOutcome::Preserved {
            constitution
                .set(store, &self.default_constitution.to_string())
                .map_err(MigrationError::SetConstitution)?;
        }

        Ok(MigrationReport {
            constitution: outcome,
        })
    }
}

/// Carries every v4 field over unchanged and takes the fields added in
/// v5 from `defaults`. No other field of `defaults` is read.
pub fn upgrade_params(legacy: LegacyParams, defaults: Params) -> Params {
    Params {
        min_deposit: legacy.min_deposit,
        max_deposit_period: legacy.max_deposit_period,
        voting_period: legacy.voting_period,
        quorum: legacy.quorum,
        threshold: legacy.threshold,
        veto_threshold: legacy.veto_threshold,
        min_initial_deposit_ratio: legacy.min_initial_deposit_ratio,
        burn_vote_quorum: legacy.burn_vote_quorum,
        burn_proposal_deposit_prevote: legacy.burn_proposal_deposit_prevote,
        burn_vote_veto: legacy.burn_vote_veto,

        expedited_min_deposit: defaults.expedited_min_deposit,
        expedited_voting_period: defaults.expedited_voting_period,
        expedited_threshold: defaults.expedited_threshold,
        proposal_cancel_ratio: defaults.proposal_cancel_ratio,
        proposal_cancel_dest: defaults.proposal_cancel_dest,
        min_deposit_ratio: defaults.min_deposit_ratio,
    }
}
