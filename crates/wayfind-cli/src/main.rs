use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "Wayfind CLI - account-backed point-of-interest search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation; must match --password
        #[arg(long)]
        confirm: String,
        /// Display name
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Search for places near an address or the configured device position
    Search {
        /// Free-text address to geocode
        #[arg(long, conflicts_with = "device")]
        address: Option<String>,
        /// Use the configured device position instead of an address
        #[arg(long)]
        device: bool,
        /// Search radius in kilometers (5, 10, 20 or 30)
        #[arg(long)]
        radius: Option<String>,
        /// Category keyword to scope and filter the search
        #[arg(long)]
        keyword: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Register {
            email,
            password,
            confirm,
            name,
            phone,
        } => commands::auth::register(&email, &password, &confirm, &name, phone).await?,
        Commands::Logout => commands::auth::logout().await?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::Search {
            address,
            device,
            radius,
            keyword,
        } => commands::search::run(address, device, radius, keyword).await?,
    }

    Ok(())
}
