//! CourseHub CLI - Store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin user (the web surface never grants the admin bit)
//! ch-cli admin create -e admin@example.com -n "Admin Name" -p "a long password"
//!
//! # Seed the catalog with demo courses
//! ch-cli seed
//! ```
//!
//! # Commands
//!
//! - `admin create` - Create admin users
//! - `seed` - Seed the store with demo courses
//!
//! # Environment Variables
//!
//! - `COURSEHUB_STORE_PATH` - Store file path (default: data/store.json)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ch-cli")]
#[command(author, version, about = "CourseHub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the store with demo courses
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password (min 8 characters)
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                let id = commands::admin::create_user(&email, &name, &password).await?;
                tracing::info!("Created admin user with ID: {id}");
            }
        },
        Commands::Seed => {
            let count = commands::seed::demo_courses().await?;
            tracing::info!("Seeded {count} demo courses");
        }
    }

    Ok(())
}
