//! Session and tenant status command.

use serde::Serialize;
use tabled::Tabled;

use crewdesk_auth::jwt;
use crewdesk_core::error::AppError;
use crewdesk_session::{SessionState, TenantManager};

use super::Context;
use crate::output::{self, OutputFormat};

/// Status display row
#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    /// Domain
    domain: String,
    /// Session
    session: String,
    /// Token expires
    token_expires: String,
    /// Tenant
    tenant: String,
    /// Tenant active
    tenant_active: String,
}

/// Execute the status command
pub fn execute(ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let manager = ctx.session_manager()?;
    let session = match manager.state() {
        SessionState::Authenticated(user) => format!("{} ({})", user.email, user.role),
        SessionState::Unauthenticated => "unauthenticated".to_string(),
        SessionState::Loading => "loading".to_string(),
    };

    let token_expires = ctx
        .vault()
        .access_token()?
        .and_then(|token| jwt::decode_claims(&token).ok())
        .and_then(|claims| claims.expires_at())
        .map(|expires| expires.to_rfc3339())
        .unwrap_or_else(|| "-".to_string());

    let tenants = TenantManager::new(&ctx.config.api, ctx.storage.clone(), ctx.events.clone());
    tenants.initialize()?;
    let tenant = tenants.current_or_default();

    let row = StatusRow {
        domain: ctx.domain.segment().to_string(),
        session,
        token_expires,
        tenant: if tenant.id.is_empty() {
            "-".to_string()
        } else {
            format!("{} ({})", tenant.company_name, tenant.subscription_plan)
        },
        tenant_active: if tenants.is_active() { "✓" } else { "✗" }.to_string(),
    };
    output::print_list(&[row], format);
    Ok(())
}
