use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wardrobe",
    about = "Wardrobe: clothing item records with soft delete",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Item document (defaults to data/clothing-items.json)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty item document
    Init,
    /// Start the HTTP server
    Serve(ServeArgs),
    /// List active items
    List,
    /// Show one active item
    Show(IdArgs),
    /// Add a new item
    Add(AddArgs),
    /// Change fields of an active item
    Update(UpdateArgs),
    /// Soft-delete an item
    Delete(IdArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, overriding the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub colour: String,
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub brand: String,
    #[arg(long)]
    pub size: String,
    #[arg(long)]
    pub image_url: String,
    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long)]
    pub purchase_date: String,
    #[arg(long)]
    pub price: f64,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub colour: Option<String>,
    #[arg(long)]
    pub user_id: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub purchase_date: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
}
