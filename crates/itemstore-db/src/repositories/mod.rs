//! Repository implementations.
//!
//! Storage types are confined to this module and never exposed through the
//! port trait signatures.

mod memory_item_repository;

pub use memory_item_repository::MemoryItemRepository;
