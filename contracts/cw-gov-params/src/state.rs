use cosmwasm_std::Addr;
use cw_gov_migrations::keys::CONSTITUTION_NAMESPACE;
use cw_storage_plus::Item;

/// The address allowed to update the constitution.
pub const AUTHORITY: Item<Addr> = Item::new("authority");
pub const CONSTITUTION: Item<String> = Item::new(CONSTITUTION_NAMESPACE);
