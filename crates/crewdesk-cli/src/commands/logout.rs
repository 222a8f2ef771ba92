//! Logout command.

use crewdesk_core::error::AppError;

use super::Context;
use crate::output;

/// Execute the logout command
pub async fn execute(ctx: &Context) -> Result<(), AppError> {
    let manager = ctx.session_manager()?;
    if !manager.is_authenticated() {
        output::print_warning("No active session.");
        return Ok(());
    }

    manager.logout().await?;
    output::print_success("Logged out; local session cleared.");
    Ok(())
}
