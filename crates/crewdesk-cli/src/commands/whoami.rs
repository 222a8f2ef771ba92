//! Whoami command.

use serde::Serialize;
use tabled::Tabled;

use crewdesk_core::error::AppError;
use crewdesk_session::route_for_role;

use super::Context;
use crate::output::{self, OutputFormat};

/// User display row
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Display name
    name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Dashboard
    dashboard: String,
    /// Active
    active: String,
}

/// Execute the whoami command
pub fn execute(ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let manager = ctx.session_manager()?;
    let Some(user) = manager.current_user() else {
        output::print_warning("Not logged in.");
        return Ok(());
    };

    let row = UserRow {
        id: user.id.clone(),
        name: user.display_name(),
        email: user.email.clone(),
        role: user.role.to_string(),
        dashboard: format!("{:?}", route_for_role(user.role, &user.email)),
        active: if user.is_active { "✓" } else { "✗" }.to_string(),
    };
    output::print_list(&[row], format);
    Ok(())
}
