use cosmwasm_std::StdError;
use cw_gov_migrations::MigrationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error("Unauthorized")]
    Unauthorized {},
}
