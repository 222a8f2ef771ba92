//! Tenant (company workspace) entity, subscription status, and plans.

pub mod model;
pub mod plan;
pub mod status;

pub use model::{Tenant, TenantPatch};
pub use plan::SubscriptionPlan;
pub use status::{SubscriptionStatus, TenantStatus};
