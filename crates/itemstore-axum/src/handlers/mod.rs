//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the core `ItemService`.

pub mod items;
pub mod seed;
