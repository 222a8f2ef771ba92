//! # crewdesk-auth
//!
//! Authentication for the CrewDesk client SDK: login/logout against the
//! backend, client-side JWT expiry inspection, login-failure
//! classification, and device fingerprint collection. One
//! [`service::AuthService`] implementation serves both session domains.

pub mod classify;
pub mod endpoints;
pub mod fingerprint;
pub mod jwt;
pub mod service;

pub use service::{AuthService, Credentials, LoginResponse};
