use cosmwasm_std::StdError;
use thiserror::Error;

/// An error encountered while migrating the store. Each variant names
/// the step that failed and carries the collaborator's error
/// unchanged.
#[derive(Error, Debug, PartialEq)]
pub enum MigrationError {
    #[error("reading legacy params: {0}")]
    ReadParams(StdError),

    #[error("decoding legacy params: {0}")]
    DecodeParams(StdError),

    #[error("encoding params: {0}")]
    EncodeParams(StdError),

    #[error("writing params: {0}")]
    WriteParams(StdError),

    #[error("setting default constitution: {0}")]
    SetConstitution(StdError),
}
