//! Maysa CLI - drive the storefront state from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product to the cart
//! maysa cart add rose-face-serum -q 2
//!
//! # Save a shipping address and make it the default
//! maysa address add --title خانه --full-name "سارا احمدی" --phone 09121234567 \
//!     --province تهران --city تهران --address "خیابان ولیعصر" --postal-code 1234567890 --default
//!
//! # Place the order and look it up again
//! maysa checkout
//! maysa orders track MYS-1A2B3C4D
//!
//! # Persian formatting helpers
//! maysa format price 1250000
//! maysa format date 2023-12-26 --long
//! ```
//!
//! # Commands
//!
//! - `cart`, `wishlist`, `compare`, `address` - Manage the persisted containers
//! - `view` - Show a product and record it as recently viewed
//! - `recent` - List recently viewed products
//! - `checkout` - Place an order for the cart
//! - `orders` - List or look up placed orders
//! - `format` - Persian number, price, and date formatting
//!
//! Configuration is read from the environment (see
//! `maysa_storefront::config`). Set `RUST_LOG` to change log verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maysa_storefront::Storefront;
use maysa_storefront::config::StorefrontConfig;
use maysa_storefront::notify::RecordingNotifier;

mod commands;

#[derive(Parser)]
#[command(name = "maysa")]
#[command(author, version, about = "Maysa storefront state tools")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage the product comparison
    Compare {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage saved shipping addresses
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
    /// Show a product and record it as recently viewed
    View {
        /// Product slug
        slug: String,
    },
    /// List recently viewed products
    Recent {
        /// Forget every recently viewed product
        #[arg(long)]
        clear: bool,
    },
    /// Place an order for the cart, shipped to the default address
    Checkout,
    /// List or look up placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Persian formatting helpers
    Format {
        #[command(subcommand)]
        action: FormatAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and its totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product slug
        slug: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product slug
        slug: String,
    },
    /// Set the quantity of a cart line (zero or less removes it)
    Set {
        /// Product slug
        slug: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ListAction {
    /// Show the list
    Show,
    /// Add a product
    Add {
        /// Product slug
        slug: String,
    },
    /// Remove a product
    Remove {
        /// Product slug
        slug: String,
    },
    /// Move a product into the cart (wishlist only)
    Move {
        /// Product slug
        slug: String,
    },
    /// Remove every product
    Clear,
}

#[derive(Subcommand)]
enum AddressAction {
    /// List saved addresses, default first
    List,
    /// Save a new address
    Add(commands::address::AddressArgs),
    /// Replace the fields of a saved address
    Update {
        /// Address ID
        id: String,

        #[command(flatten)]
        fields: commands::address::AddressArgs,
    },
    /// Make an address the default
    Default {
        /// Address ID
        id: String,
    },
    /// Delete an address
    Delete {
        /// Address ID
        id: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List placed orders, newest first
    List,
    /// Show the most recently placed order
    Last,
    /// Look up an order by number
    Track {
        /// Order number, e.g. MYS-1A2B3C4D
        number: String,
    },
    /// Forget the order history (the last order is kept)
    Clear,
}

#[derive(Subcommand)]
enum FormatAction {
    /// Group and transliterate an integer
    Number {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Format a price in Toman
    Price { value: u64 },
    /// Convert a date to the Jalali calendar
    Date {
        /// RFC 3339 timestamp or YYYY-MM-DD
        value: String,

        /// Use the long form with the month name
        #[arg(long)]
        long: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the global subscriber. Logs go to stderr so command output stays
/// clean on stdout.
fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maysa_storefront=info,maysa_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Formatting needs no storefront state
    if let Commands::Format { action } = &cli.command {
        match action {
            FormatAction::Number { value } => commands::format::number(*value),
            FormatAction::Price { value } => commands::format::price(*value),
            FormatAction::Date { value, long } => commands::format::date(value, *long),
        }
        return Ok(());
    }

    let config = StorefrontConfig::from_env()?;
    let notifier = Arc::new(RecordingNotifier::new());
    let mut shop = Storefront::from_config(&config, notifier.clone())?;

    let result = dispatch(&mut shop, cli.command);
    commands::print_toasts(&notifier.take());
    result
}

fn dispatch(shop: &mut Storefront, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(shop),
            CartAction::Add { slug, quantity } => commands::cart::add(shop, &slug, quantity)?,
            CartAction::Remove { slug } => commands::cart::remove(shop, &slug)?,
            CartAction::Set { slug, quantity } => commands::cart::set(shop, &slug, quantity)?,
            CartAction::Clear => shop.cart_mut().clear_cart(),
        },
        Commands::Wishlist { action } => match action {
            ListAction::Show => commands::lists::show_wishlist(shop),
            ListAction::Add { slug } => commands::lists::add_to_wishlist(shop, &slug)?,
            ListAction::Remove { slug } => commands::lists::remove_from_wishlist(shop, &slug)?,
            ListAction::Move { slug } => commands::lists::move_to_cart(shop, &slug)?,
            ListAction::Clear => shop.wishlist_mut().clear_wishlist(),
        },
        Commands::Compare { action } => match action {
            ListAction::Show => commands::lists::show_comparison(shop),
            ListAction::Add { slug } => commands::lists::add_to_comparison(shop, &slug)?,
            ListAction::Remove { slug } => commands::lists::remove_from_comparison(shop, &slug)?,
            ListAction::Move { .. } => {
                return Err("move is only available for the wishlist".into());
            }
            ListAction::Clear => shop.comparison_mut().clear_comparison(),
        },
        Commands::Address { action } => match action {
            AddressAction::List => commands::address::list(shop),
            AddressAction::Add(args) => commands::address::add(shop, args)?,
            AddressAction::Update { id, fields } => commands::address::update(shop, &id, fields)?,
            AddressAction::Default { id } => commands::address::set_default(shop, &id)?,
            AddressAction::Delete { id } => commands::address::delete(shop, &id)?,
        },
        Commands::View { slug } => commands::lists::view(shop, &slug)?,
        Commands::Recent { clear } => {
            if clear {
                shop.recently_viewed_mut().clear_recently_viewed();
            } else {
                commands::lists::show_recent(shop);
            }
        }
        Commands::Checkout => commands::orders::checkout(shop)?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(shop),
            OrdersAction::Last => commands::orders::last(shop)?,
            OrdersAction::Track { number } => commands::orders::track(shop, &number)?,
            OrdersAction::Clear => shop.orders_mut().clear_history(),
        },
        Commands::Format { .. } => {}
    }
    Ok(())
}
