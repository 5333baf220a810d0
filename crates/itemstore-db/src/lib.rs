#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::MemoryItemRepository;

// Used by the integration tests under tests/
#[cfg(test)]
use proptest as _;
