//! RoboShop CLI - Browse the robot catalogue and build a cart from the terminal.
//!
//! Commands:
//! - `roboshop catalogue` - List visible products under a filter and search
//! - `roboshop cart` - Replay cart operations and print the cart summary
//! - `roboshop shop` - Interactive storefront session
//! - `roboshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogueArgs, ConfigArgs, ShopArgs};

/// RoboShop CLI - Browse robots and manage a shopping cart
#[derive(Parser)]
#[command(name = "roboshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue products
    Catalogue(CatalogueArgs),

    /// Apply cart operations and show the cart
    Cart(CartArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    telemetry::init(&ctx.config.log, cli.verbose);

    let result = match cli.command {
        Commands::Catalogue(args) => commands::catalogue::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
