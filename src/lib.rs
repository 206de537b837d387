#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;

mod error;

pub mod hash_table;

pub mod slot_store;

pub mod strategy;

pub use config::TableConfig;
pub use error::InsertError;
pub use error::InvalidArgument;
pub use error::TableError;
#[cfg(any(test, feature = "stats"))]
pub use hash_table::DebugStats;
pub use hash_table::AosTable;
pub use hash_table::RobinHoodTable;
pub use hash_table::SoaTable;
pub use slot_store::AosStore;
pub use slot_store::DefaultStore;
pub use slot_store::SlotStore;
pub use slot_store::SlotView;
pub use slot_store::SoaStore;
