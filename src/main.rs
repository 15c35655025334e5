use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{
    BrowseCommand, ConfigCommand, FavouriteCommand, ListCommand, LoginCommand, LogoutCommand,
    StatusCommand,
};
use recipebook::config::Config;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(version)]
#[command(about = "Browse recipes and star your favourites", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered
    List(ListCommand),

    /// Browse recipes interactively
    Browse(BrowseCommand),

    /// Star a recipe
    Star(FavouriteCommand),

    /// Unstar a recipe
    Unstar(FavouriteCommand),

    /// Sign in with an access token
    Login(LoginCommand),

    /// Sign out
    Logout(LogoutCommand),

    /// Show sign-in status
    Status(StatusCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with listings
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipebook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::List(cmd)) => cmd.run(&config).await?,
        Some(Commands::Browse(cmd)) => cmd.run(&config).await?,
        Some(Commands::Star(cmd)) => cmd.star(&config).await?,
        Some(Commands::Unstar(cmd)) => cmd.unstar(&config).await?,
        Some(Commands::Login(cmd)) => cmd.run(&config)?,
        Some(Commands::Logout(cmd)) => cmd.run(&config)?,
        Some(Commands::Status(cmd)) => cmd.run(&config)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
