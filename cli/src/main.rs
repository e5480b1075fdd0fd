use std::io::{self, Write};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use grocery_core::config::{BASE_URL_VAR, DEFAULT_BASE_URL};
use grocery_core::{ClientConfig, GroceryController, GroceryItem, Transport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grocery")]
#[command(about = "Manage a shared grocery list")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the grocery list API
    #[arg(long = "api-url", env = BASE_URL_VAR, default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the list
    List,
    /// Add one unit of a new product
    Add {
        /// Product name
        name: String,
    },
    /// Mark an item as bought
    Bought { id: u64 },
    /// Mark an item as not bought
    Unbought { id: u64 },
    /// Increase the amount by one
    Inc { id: u64 },
    /// Decrease the amount by one, removing the item at zero
    Dec { id: u64 },
    /// Rename an item
    Rename {
        id: u64,
        /// New name
        name: String,
    },
    /// Remove an item
    Delete { id: u64 },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctl = ClientConfig::new(&cli.api_url).connect();
    let command = cli.command.unwrap_or(Commands::List);
    run(&mut ctl, command, &mut std::io::stdout().lock())
}

/// Load the list, apply `command`, then print the resulting list to `out`.
fn run<T: Transport>(
    ctl: &mut GroceryController<T>,
    command: Commands,
    out: &mut impl Write,
) -> Result<()> {
    ctl.refresh()?;

    match command {
        Commands::List => {}
        Commands::Add { name } => {
            ctl.set_new_item_name(name);
            ctl.submit_new_item()?;
        }
        Commands::Bought { id } => {
            lookup(ctl.items(), id)?;
            ctl.toggle_bought(id, true)?;
        }
        Commands::Unbought { id } => {
            lookup(ctl.items(), id)?;
            ctl.toggle_bought(id, false)?;
        }
        Commands::Inc { id } => {
            let amount = lookup(ctl.items(), id)?.amount;
            ctl.increment_amount(id, amount)?;
        }
        Commands::Dec { id } => {
            let amount = lookup(ctl.items(), id)?.amount;
            ctl.decrement_amount(id, amount)?;
        }
        Commands::Rename { id, name } => {
            lookup(ctl.items(), id)?;
            ctl.begin_edit(id);
            ctl.set_edit_draft(name);
            ctl.submit_edit()?;
        }
        Commands::Delete { id } => {
            lookup(ctl.items(), id)?;
            ctl.delete_item(id)?;
        }
    }

    render(ctl.items(), out)?;
    Ok(())
}

fn lookup(items: &[GroceryItem], id: u64) -> Result<&GroceryItem> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| anyhow!("no grocery item with id {id}"))
}

fn render(items: &[GroceryItem], out: &mut impl Write) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "The grocery list is empty.");
    }
    for item in items {
        let mark = if item.bought { "x" } else { " " };
        writeln!(out, "[{mark}] #{} {} ({})", item.id, item.name, item.amount)?;
    }
    Ok(())
}
