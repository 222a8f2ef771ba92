//! # crewdesk-entity
//!
//! Domain entity models for the CrewDesk client SDK: users and roles,
//! devices, token pairs, and tenants with their subscription plans.

pub mod device;
pub mod session;
pub mod tenant;
pub mod user;

pub use device::{Device, DeviceFingerprint};
pub use session::TokenPair;
pub use tenant::{SubscriptionPlan, SubscriptionStatus, Tenant, TenantPatch, TenantStatus};
pub use user::{User, UserRole};
