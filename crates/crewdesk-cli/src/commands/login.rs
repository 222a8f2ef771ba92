//! Login command.

use clap::Args;
use dialoguer::Password;

use crewdesk_core::error::AppError;
use crewdesk_session::route_for_role;

use super::Context;
use crate::output;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login email
    pub email: String,

    /// Password (prompted interactively when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, ctx: &Context) -> Result<(), AppError> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::validation(format!("Failed to read password: {e}")))?,
    };

    let manager = ctx.session_manager()?;
    let user = manager.login(&args.email, &password).await?;

    let dashboard = route_for_role(user.role, &user.email);
    output::print_success(&format!(
        "Logged in as {} ({}) → {:?} dashboard",
        user.display_name(),
        user.role,
        dashboard
    ));
    Ok(())
}
