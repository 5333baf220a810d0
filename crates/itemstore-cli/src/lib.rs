#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing as _;

pub mod commands;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
