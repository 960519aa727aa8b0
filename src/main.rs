//! Storefront demo CLI: fetch a catalog, apply filters, print the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_engine::fetch::HttpProductSource;
use storefront_engine::view;
use storefront_engine::{BrowseSession, FacetKey, Product, Scope};

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse a product catalog from the terminal")]
struct Args {
    /// Base URL of the catalog API (falls back to the STOREFRONT_API env var).
    #[arg(long)]
    api: Option<String>,

    /// Load the catalog from a local JSON file instead of the API.
    #[arg(long, conflicts_with = "api")]
    file: Option<PathBuf>,

    /// Category slug to browse ("all" for the full catalog).
    #[arg(long, default_value = "all")]
    category: String,

    /// Free-text search query.
    #[arg(long)]
    search: Option<String>,

    /// Product type filter (repeatable).
    #[arg(long = "type")]
    types: Vec<String>,

    /// Size filter (repeatable).
    #[arg(long)]
    size: Vec<String>,

    /// Colour filter (repeatable).
    #[arg(long)]
    color: Vec<String>,

    /// Price bracket token (ALL, 0-200, ... 2500P).
    #[arg(long, default_value = "ALL")]
    price: String,

    /// Sort token: pop, phl, plh, new.
    #[arg(long, default_value = "pop")]
    sort: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let scope = if args.category == "all" {
        Scope::All
    } else {
        Scope::Category(args.category.clone())
    };

    let mut session = BrowseSession::new(scope.clone());
    if let Some(path) = &args.file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog file {}", path.display()))?;
        let products: Vec<Product> = serde_json::from_str(&raw).context("parsing catalog JSON")?;
        let ticket = session.begin_fetch();
        session.commit(ticket, products);
    } else {
        let base = args
            .api
            .clone()
            .or_else(|| std::env::var("STOREFRONT_API").ok())
            .context("no catalog source: pass --api or --file, or set STOREFRONT_API")?;
        let source = HttpProductSource::new(base)?;
        session.load(&source).await;
    }

    session.set_search(args.search.clone());
    for value in &args.types {
        session.toggle_value(FacetKey::Type, value);
    }
    for value in &args.size {
        session.toggle_value(FacetKey::Size, value);
    }
    for value in &args.color {
        session.toggle_value(FacetKey::Color, value);
    }
    session.set_price_token(&args.price);
    session.set_sort_token(&args.sort);

    let meta = view::page_meta(session.scope(), "Storefront");
    println!("# {}\n", meta.title);

    for panel in view::facet_panels(session.collection(), session.state()) {
        let options: Vec<String> = panel
            .options
            .iter()
            .map(|o| {
                let mark = if o.selected { "*" } else { "" };
                format!("{}{} ({})", o.value, mark, o.count)
            })
            .collect();
        println!("{}: {}", panel.label, options.join(", "));
    }

    let chips = view::active_chips(session.state());
    if !chips.is_empty() {
        let labels: Vec<String> = chips.iter().map(|c| format!("{}={}", c.key, c.value)).collect();
        println!("Active filters: {}", labels.join(", "));
    }

    let results = view::results_view(session.results(), session.state());
    println!();
    if results.empty {
        println!("No products found.");
        if results.offer_clear_filters {
            println!("Try clearing your filters.");
        }
        return Ok(());
    }

    for p in &results.products {
        let discount = p
            .discount_percent()
            .map(|d| format!("  ({d}% off)"))
            .unwrap_or_default();
        println!("{:<12} Rs.{:>8}  {}{}", p.id, p.price, p.title, discount);
    }
    println!("\n{} product(s)", results.products.len());
    Ok(())
}
