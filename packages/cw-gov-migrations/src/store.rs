//! The store capabilities a migration consumes.

use cosmwasm_std::{HexBinary, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use serde::{de::DeserializeOwned, Serialize};

/// A byte-keyed store scoped to the current transaction.
pub trait KvStore {
    /// Loads the value under `key`. A missing key is an error
    /// (`StdError::NotFound`).
    fn get(&self, key: &[u8]) -> StdResult<Vec<u8>>;

    /// Writes `value` under `key`. Empty values can not be stored and
    /// are an error.
    fn set(&mut self, key: &[u8], value: &[u8]) -> StdResult<()>;
}

impl<'s> KvStore for dyn Storage + 's {
    fn get(&self, key: &[u8]) -> StdResult<Vec<u8>> {
        Storage::get(self, key).ok_or_else(|| {
            StdError::not_found(format!("key 0x{}", HexBinary::from(key).to_hex()))
        })
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> StdResult<()> {
        if value.is_empty() {
            return Err(StdError::generic_err(format!(
                "empty value for key 0x{}",
                HexBinary::from(key).to_hex()
            )));
        }
        Storage::set(self, key, value);
        Ok(())
    }
}

/// A single value of type `T` under a fixed key of a store `S`.
pub trait Singleton<S: ?Sized, T> {
    fn has(&self, store: &S) -> StdResult<bool>;

    fn set(&self, store: &mut S, value: &T) -> StdResult<()>;
}

impl<'a, 's, T> Singleton<dyn Storage + 's, T> for Item<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    fn has(&self, store: &(dyn Storage + 's)) -> StdResult<bool> {
        Ok(self.exists(store))
    }

    fn set(&self, store: &mut (dyn Storage + 's), value: &T) -> StdResult<()> {
        self.save(store, value)
    }
}
