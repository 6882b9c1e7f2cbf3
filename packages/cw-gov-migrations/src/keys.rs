//! Store layout of the governance module.

/// Where v4 of the module stored its params.
pub const LEGACY_PARAMS_KEY: &[u8] = &[0x30];

/// Where v5 of the module stores its params. Same bytes as
/// [`LEGACY_PARAMS_KEY`], but the record under it uses the new schema.
pub const PARAMS_KEY: &[u8] = &[0x30];

/// Namespace of the constitution item (collection prefix 49).
pub const CONSTITUTION_NAMESPACE: &str = "\x31";

/// The constitution set by migration when none exists.
pub const DEFAULT_CONSTITUTION: &str = "This chain has no constitution.";
