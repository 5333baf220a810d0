//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports and domain logic;
//! they don't know about concrete implementations.

mod app_core;
mod item_service;

pub use app_core::AppCore;
pub use item_service::ItemService;
