//! # crewdesk-core
//!
//! Core crate for the CrewDesk client SDK. Contains traits,
//! configuration schemas, domain events and the event bus, shared
//! response types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CrewDesk crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
