//! Bitewala CLI - Catalog, quote, and order tools.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! bw-cli catalog
//!
//! # List only powder packs
//! bw-cli catalog --filter powder
//!
//! # Search by name or variant
//! bw-cli catalog --search sugar
//!
//! # Price two powder packs and a bottle
//! bw-cli quote 1:2 3:1
//!
//! # Shipped orders from one customer
//! bw-cli orders --status shipped --search priya
//! ```
//!
//! # Commands
//!
//! - `catalog` - List the built-in catalog
//! - `quote` - Price a cart using the ledger (shipping and GST included)
//! - `orders` - List the demo order book

#![cfg_attr(not(test), forbid(unsafe_code))]

use bitewala_admin::services::{OrderBook, OrderQuery, StatusFilter};
use bitewala_core::{Catalog, ProductFilter};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bw-cli")]
#[command(author, version, about = "Bitewala CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Catalog {
        /// Category filter (`all`, `powder`, `ready`, `gift`)
        #[arg(short, long, default_value = "all")]
        filter: ProductFilter,

        /// Match product name or variant
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Price a cart quote
    Quote {
        /// Items as `<product-id>:<quantity>`; quantity defaults to 1
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// List demo orders
    Orders {
        /// Only orders in this status (`pending`, `packed`, `shipped`, `delivered`, `cancelled`)
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Match order ID, customer name, or email
        #[arg(long, default_value = "")]
        search: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = match cli.command {
        Commands::Catalog { filter, search } => {
            commands::catalog::list(&Catalog::builtin(), filter, &search)
        }
        Commands::Quote { items } => commands::quote::run(&Catalog::builtin(), &items)?,
        Commands::Orders { status, search } => {
            commands::orders::list(&OrderBook::demo(), &OrderQuery { search, status })
        }
    };
    print!("{output}");
    Ok(())
}
