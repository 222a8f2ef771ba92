//! # crewdesk-client
//!
//! Authenticated HTTP plumbing for the CrewDesk client SDK: bearer
//! injection, 401 → refresh → retry with platform-wide single-flight
//! refresh coordination, and typed response parsing.

pub mod client;
pub mod refresh;

pub use client::ApiClient;
pub use refresh::RefreshCoordinator;
