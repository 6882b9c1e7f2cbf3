#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod codec;
mod error;
pub mod keys;
pub mod params;
pub mod store;
pub mod v5;


pub use crate::error::MigrationError;
