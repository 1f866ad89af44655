//! Workforce CLI - role mapping, feature access, and client session tools.

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use workforce_core::{
    is_admin_role, to_api_role, to_ui_role, FeatureAccess, FeatureFlags, SectionRequirements,
    Session, TenantId, Theme, UserId,
};
use workforce_storage::{JsonSessionStore, SessionStore};

#[derive(Parser)]
#[command(name = "workforce")]
#[command(about = "Role mapping and feature access for workforce tenants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the stored session and preferences
    #[arg(long, default_value = ".workforce", global = true)]
    home: PathBuf,

    /// Section requirement table (JSON); the built-in table is used otherwise
    #[arg(long, global = true)]
    sections: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate role names
    #[command(subcommand)]
    Role(RoleCommand),

    /// Evaluate section visibility
    #[command(subcommand)]
    Access(AccessCommand),

    /// Manage the stored client session
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Subcommand)]
enum RoleCommand {
    /// Backend role to UI role
    Ui {
        /// Backend role
        raw: Option<String>,
    },
    /// UI role to backend role
    Api {
        /// UI role
        role: String,
    },
    /// Whether a backend role is administrative
    IsAdmin {
        /// Backend role
        raw: Option<String>,
    },
}

#[derive(Subcommand)]
enum AccessCommand {
    /// Check one section
    Check {
        /// Section name
        section: String,
        /// Feature flags (JSON object of booleans)
        #[arg(long)]
        flags: PathBuf,
    },
    /// List every section with its decision
    List {
        /// Feature flags (JSON object of booleans)
        #[arg(long)]
        flags: PathBuf,
    },
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Show the stored session and preferences
    Show,
    /// Store a new session
    Login {
        /// User ID
        #[arg(long)]
        user: String,
        /// Tenant ID
        #[arg(long)]
        tenant: String,
        /// Backend role
        #[arg(long)]
        role: String,
        /// Bearer token
        #[arg(long)]
        token: String,
        /// Session lifetime in hours
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        ttl_hours: Option<i64>,
    },
    /// Remove the stored session
    Logout,
    /// Set the color theme
    Theme {
        /// light, dark or system
        theme: Theme,
    },
    /// Sections visible to the signed-in user
    Sections {
        /// Feature flags (JSON object of booleans)
        #[arg(long)]
        flags: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Role(command) => run_role(command),
        Commands::Access(command) => {
            let table = load_sections(cli.sections.as_deref())?;
            run_access(command, &table)
        }
        Commands::Session(command) => {
            let mut store = JsonSessionStore::new(&cli.home).await?;
            run_session(command, &mut store, cli.sections.as_deref()).await
        }
    }
}

fn run_role(command: RoleCommand) -> Result<()> {
    match command {
        RoleCommand::Ui { raw } => println!("{}", to_ui_role(raw.as_deref())),
        RoleCommand::Api { role } => println!("{}", to_api_role(&role)),
        RoleCommand::IsAdmin { raw } => println!("{}", is_admin_role(raw.as_deref())),
    }
    Ok(())
}

fn run_access(command: AccessCommand, table: &SectionRequirements) -> Result<()> {
    match command {
        AccessCommand::Check { section, flags } => {
            let flags = load_flags(&flags)?;
            let access = FeatureAccess::new(table, &flags);
            let visible = access.is_section_visible(&section)?;
            println!("{}", format_visibility(visible));
        }
        AccessCommand::List { flags } => {
            let flags = load_flags(&flags)?;
            let access = FeatureAccess::new(table, &flags);

            println!("Sections ({})", table.len());
            for entry in access.visibility() {
                let required: Vec<_> = entry.required.iter().map(|f| f.as_str()).collect();
                println!(
                    "  {:<14} | {:<7} | {}",
                    entry.section,
                    format_visibility(entry.visible),
                    if required.is_empty() { "always".to_string() } else { required.join(" | ") },
                );
            }
        }
    }
    Ok(())
}

async fn run_session<S: SessionStore>(
    command: SessionCommand,
    store: &mut S,
    sections: Option<&Path>,
) -> Result<()> {
    match command {
        SessionCommand::Show => {
            let state = store.load_state().await?;
            match &state.session {
                Some(session) => {
                    println!("Session: {}", session.id);
                    println!("  User: {}", session.user_id);
                    println!("  Tenant: {}", session.tenant_id);
                    println!("  Role: {}", session.ui_role());
                    println!("  Admin: {}", session.is_admin());
                    println!("  Issued: {}", session.issued_at);
                    if let Some(expires) = session.expires_at {
                        println!("  Expires: {}", expires);
                    }
                }
                None => println!("Not signed in"),
            }
            println!("Theme: {}", state.preferences.theme);
        }
        SessionCommand::Login { user, tenant, role, token, ttl_hours } => {
            let mut session = Session::new(UserId::new(user), TenantId::new(tenant), role, token);
            if let Some(hours) = ttl_hours {
                session = session.with_ttl_hours(hours)?;
            }
            store.save_session(&session).await?;
            info!("Signed in as {} ({})", session.user_id, session.ui_role());
            println!("Session: {}", session.id);
        }
        SessionCommand::Logout => {
            store.clear_session().await?;
            println!("Signed out");
        }
        SessionCommand::Theme { theme } => {
            let mut preferences = store.load_preferences().await?;
            preferences.theme = theme;
            store.save_preferences(&preferences).await?;
            println!("Theme: {}", preferences.theme);
        }
        SessionCommand::Sections { flags } => {
            let session = store.require_session().await?;
            let table = load_sections(sections)?;
            let flags = load_flags(&flags)?;
            let access = FeatureAccess::new(&table, &flags);

            println!("Tenant {} ({})", session.tenant_id, session.ui_role());
            if session.is_admin() {
                println!("  Administrator");
            }
            for section in access.visible_sections() {
                println!("  {}", section);
            }
        }
    }
    Ok(())
}

fn load_sections(path: Option<&Path>) -> Result<SectionRequirements> {
    match path {
        Some(path) => SectionRequirements::load(path)
            .with_context(|| format!("loading section table from {}", path.display())),
        None => {
            debug!("Using built-in section table");
            Ok(SectionRequirements::default())
        }
    }
}

fn load_flags(path: &Path) -> Result<FeatureFlags> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading feature flags from {}", path.display()))?;
    let flags = FeatureFlags::from_json_str(&json)?;
    debug!("Enabled features: {:?}", flags.enabled());
    Ok(flags)
}

fn format_visibility(visible: bool) -> &'static str {
    if visible { "visible" } else { "hidden" }
}
