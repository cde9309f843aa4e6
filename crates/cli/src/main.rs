//! Nightmarket CLI - terminal front end for the storefront core.
//!
//! # Usage
//!
//! ```bash
//! # Featured picks (the home page grid)
//! nm-cli home
//!
//! # Browse the shop with filters
//! nm-cli shop --category electronics --sort price-asc
//! nm-cli shop --search "wireless"
//! nm-cli shop --from-url "category=fashion&sort=price-desc"
//!
//! # Deals page
//! nm-cli deals
//!
//! # Cart and wishlist
//! nm-cli cart add p1
//! nm-cli cart list
//! nm-cli cart remove-at 0
//! nm-cli cart checkout
//! nm-cli wishlist toggle p9
//!
//! # Preferences and registration
//! nm-cli mode toggle
//! nm-cli register "Ada Lovelace" ada@example.com
//! ```
//!
//! State persists under `NM_DATA_DIR` (default `.nightmarket`), so carts
//! survive between invocations the way localStorage survives reloads.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary renders to the terminal; stdout/stderr are its UI.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use nightmarket_storefront::{ShopRequest, StorefrontConfig, StorefrontState};

mod commands;

#[derive(Parser)]
#[command(name = "nm-cli")]
#[command(author, version, about = "Nightmarket storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the featured picks from the home page
    Home,
    /// Browse the shop with filter, search, and sort
    Shop {
        /// Category name, or "all"
        #[arg(short, long)]
        category: Option<String>,

        /// Search text matched against product names
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: `featured`, `price-asc`, `price-desc`
        #[arg(long)]
        sort: Option<String>,

        /// Raw URL query string pre-seeding the selections,
        /// e.g. "category=fashion&sort=price-asc"
        #[arg(long)]
        from_url: Option<String>,
    },
    /// Show products currently on deal
    Deals,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Display mode preference
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },
    /// Register a user (writes the signup collaborator's fields)
    Register {
        /// Full name
        name: String,
        /// Email address
        email: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart contents with positions and the running total
    List,
    /// Add a product by id
    Add {
        /// Product id, e.g. p1
        id: String,
    },
    /// Remove the line at a position (positions shift down afterwards)
    RemoveAt {
        /// Zero-based cart position
        index: usize,
    },
    /// Remove a line by its stable entry id
    Remove {
        /// Entry id shown by `cart list`
        entry: String,
    },
    /// Empty the cart
    Clear,
    /// Simulated checkout: report the total and empty the cart
    Checkout,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List wishlisted products
    List,
    /// Toggle a product by id
    Toggle {
        /// Product id, e.g. p9
        id: String,
    },
}

#[derive(Subcommand)]
enum ModeAction {
    /// Show the current mode
    Show,
    /// Switch between light and dark
    Toggle,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Logic errors are user-visible notices, not crashes.
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env();
    let mut state = StorefrontState::new(&config)?;

    match cli.command {
        Commands::Home => commands::shop::home(&state),
        Commands::Shop {
            category,
            search,
            sort,
            from_url,
        } => {
            let request = build_request(category, search, sort, from_url);
            commands::shop::shop(&state, &request);
        }
        Commands::Deals => commands::shop::deals(&state),
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(&state),
            CartAction::Add { id } => commands::cart::add(&mut state, &id)?,
            CartAction::RemoveAt { index } => commands::cart::remove_at(&mut state, index)?,
            CartAction::Remove { entry } => commands::cart::remove(&mut state, &entry)?,
            CartAction::Clear => commands::cart::clear(&mut state),
            CartAction::Checkout => commands::cart::checkout(&mut state)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(&state),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut state, &id)?,
        },
        Commands::Mode { action } => match action {
            ModeAction::Show => commands::account::show_mode(&state),
            ModeAction::Toggle => commands::account::toggle_mode(&mut state),
        },
        Commands::Register { name, email } => commands::account::register(&state, &name, &email),
    }
    Ok(())
}

/// Combine a `--from-url` query string with explicit flag overrides.
fn build_request(
    category: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    from_url: Option<String>,
) -> ShopRequest {
    use nightmarket_core::{CategoryFilter, SortKey};

    let mut request = from_url
        .as_deref()
        .map(ShopRequest::from_query_string)
        .unwrap_or_default();

    if let Some(category) = category {
        request.category = CategoryFilter::parse(&category);
    }
    if let Some(search) = search {
        request.search = search;
    }
    if let Some(sort) = sort {
        request.sort = SortKey::parse(&sort);
    }
    request
}
