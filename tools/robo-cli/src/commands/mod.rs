//! CLI command implementations.

pub mod cart;
pub mod catalogue;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

use crate::config::SourceKind;
use cart::CartOp;

/// Catalogue source overrides shared by every storefront command.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Catalogue source (overrides config).
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Catalogue endpoint for the http source (overrides config).
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Arguments for the catalogue command.
#[derive(Args)]
pub struct CatalogueArgs {
    /// Category to show, or "all".
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Case-insensitive name search.
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:<id>, remove:<id>, set:<id>=<qty>,
    /// inc:<id>, dec:<id>, open, close.
    pub ops: Vec<CartOp>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
