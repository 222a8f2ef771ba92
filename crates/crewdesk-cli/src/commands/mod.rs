//! CLI command definitions and dispatch.

pub mod login;
pub mod logout;
pub mod request;
pub mod status;
pub mod tenant;
pub mod whoami;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crewdesk_auth::AuthService;
use crewdesk_core::config::AppConfig;
use crewdesk_core::error::AppError;
use crewdesk_core::events::EventBus;
use crewdesk_core::traits::KeyValueStore;
use crewdesk_session::SessionManager;
use crewdesk_store::{SessionDomain, SessionVault, StorageManager};

use crate::output::OutputFormat;

/// CrewDesk — Multi-tenant HR & Operations Platform
#[derive(Debug, Parser)]
#[command(name = "crewdesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (config/<env>.toml overlay)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Operate on the platform-operator session instead of the
    /// workspace session
    #[arg(long)]
    pub platform: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and establish a session
    Login(login::LoginArgs),
    /// Log out and clear the session
    Logout,
    /// Show the current user
    Whoami,
    /// Show session and tenant status
    Status,
    /// Tenant (workspace) management
    Tenant(tenant::TenantArgs),
    /// Issue a raw authenticated API request
    Request(request::RequestArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let ctx = Context::build(&self.env, self.platform)?;
        match &self.command {
            Commands::Login(args) => login::execute(args, &ctx).await,
            Commands::Logout => logout::execute(&ctx).await,
            Commands::Whoami => whoami::execute(&ctx, self.format),
            Commands::Status => status::execute(&ctx, self.format),
            Commands::Tenant(args) => tenant::execute(args, &ctx, self.format).await,
            Commands::Request(args) => request::execute(args, &ctx).await,
        }
    }
}

/// Shared wiring for all commands: config, storage, and the session
/// services for the selected domain.
pub struct Context {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Shared persistent storage.
    pub storage: Arc<dyn KeyValueStore>,
    /// The selected session domain.
    pub domain: SessionDomain,
    /// Event bus shared by the managers.
    pub events: EventBus,
}

impl Context {
    /// Load configuration and open the session storage.
    pub fn build(env: &str, platform: bool) -> Result<Self, AppError> {
        let config = AppConfig::load(env)?;
        let storage = StorageManager::new(&config.storage)?.store();
        let domain = if platform {
            SessionDomain::Platform
        } else {
            SessionDomain::Workspace
        };
        Ok(Self {
            config,
            storage,
            domain,
            events: EventBus::default(),
        })
    }

    /// The session vault for the selected domain.
    pub fn vault(&self) -> SessionVault {
        SessionVault::new(Arc::clone(&self.storage), self.domain)
    }

    /// An auth service for the selected domain.
    pub fn auth(&self) -> AuthService {
        AuthService::new(&self.config.api, self.vault())
    }

    /// A session manager for the selected domain, already initialized
    /// from persisted storage.
    pub fn session_manager(&self) -> Result<SessionManager, AppError> {
        let manager = SessionManager::new(self.auth(), self.events.clone());
        manager.initialize()?;
        Ok(manager)
    }
}
