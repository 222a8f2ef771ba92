//! Tenant (workspace) management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crewdesk_core::error::AppError;
use crewdesk_entity::Tenant;
use crewdesk_session::TenantManager;

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for tenant commands
#[derive(Debug, Args)]
pub struct TenantArgs {
    /// Tenant subcommand
    #[command(subcommand)]
    pub command: TenantCommand,
}

/// Tenant subcommands
#[derive(Debug, Subcommand)]
pub enum TenantCommand {
    /// Resolve a tenant by subdomain and persist it
    Resolve {
        /// The workspace subdomain
        subdomain: String,
    },
    /// Show the persisted tenant
    Show,
}

/// Tenant display row
#[derive(Debug, Serialize, Tabled)]
struct TenantRow {
    /// Tenant ID
    id: String,
    /// Company
    company: String,
    /// Subdomain
    subdomain: String,
    /// Plan
    plan: String,
    /// Subscription
    subscription: String,
    /// Seats
    seats: String,
    /// Active
    active: String,
}

impl TenantRow {
    fn from_tenant(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id.clone(),
            company: tenant.company_name.clone(),
            subdomain: tenant.subdomain.clone(),
            plan: tenant.subscription_plan.clone(),
            subscription: tenant.subscription_status.to_string(),
            seats: format!("{}/{}", tenant.current_users, tenant.max_users),
            active: if tenant.is_active() { "✓" } else { "✗" }.to_string(),
        }
    }
}

/// Execute tenant commands
pub async fn execute(args: &TenantArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let manager = TenantManager::new(&ctx.config.api, ctx.storage.clone(), ctx.events.clone());
    manager.initialize()?;

    match &args.command {
        TenantCommand::Resolve { subdomain } => match manager.resolve_subdomain(subdomain).await {
            Some(tenant) => {
                output::print_list(&[TenantRow::from_tenant(&tenant)], format);
                Ok(())
            }
            None => {
                output::print_warning(&format!("No workspace found for '{subdomain}'."));
                Ok(())
            }
        },
        TenantCommand::Show => {
            match manager.current() {
                Some(tenant) => output::print_list(&[TenantRow::from_tenant(&tenant)], format),
                None => output::print_warning("No tenant persisted; run `tenant resolve` first."),
            }
            Ok(())
        }
    }
}
