//! Foodics Dashboard CLI
//!
//! Terminal front end over the same store and router the web dashboard uses:
//! - Browse posts page by page, optionally filtered by title
//! - Show the comments of a post
//! - Inspect the route table
//! - Generate a default config file

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foodics_dashboard::config::{generate_default_config, Config, LoggingConfig};
use foodics_dashboard::router::{RouteTable, ROUTES};
use foodics_dashboard::service::PostService;
use foodics_dashboard::store::PostStore;
use foodics_dashboard::{Comment, Post};

#[derive(Parser)]
#[command(name = "foodics-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse posts from the dashboard's posts API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Posts API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of posts
    Posts {
        /// Page number (clamped to the available pages)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Only show posts whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the comments of a post
    Comments {
        /// Post id
        id: u64,
    },

    /// List the dashboard routes
    Routes,

    /// Resolve a path against the route table
    Route {
        /// Path to resolve (e.g. /tables)
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("Foodics Dashboard CLI v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Posts { page, search } => {
            let service = PostService::new(config.api.service_config())?;
            let mut store = PostStore::with_page_size(config.store.posts_per_page);

            let Some(posts) = service.get_posts().await else {
                eprintln!("Could not fetch posts from {}", config.api.base_url);
                std::process::exit(1);
            };
            store.set_posts(posts);

            if let Some(term) = search {
                store.set_search_term(term);
            }
            store.go_to_page(page);

            match cli.format {
                OutputFormat::Json => {
                    let body = json!({
                        "page": store.current_page(),
                        "total_pages": store.total_pages(),
                        "total_posts": store.filtered_posts().len(),
                        "search": store.search_term(),
                        "posts": store.paginated_posts(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => print_posts(&store),
            }
        }

        Commands::Comments { id } => {
            let service = PostService::new(config.api.service_config())?;

            let Some(comments) = service.get_post_comments(id).await else {
                eprintln!("Could not fetch comments for post {}", id);
                std::process::exit(1);
            };

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comments)?),
                OutputFormat::Table => print_comments(id, &comments),
            }
        }

        Commands::Routes => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ROUTES)?),
            OutputFormat::Table => {
                println!("{:<10} {:<12} {}", "Path", "View", "Document title");
                println!("{}", "-".repeat(60));
                for route in RouteTable::default().iter() {
                    println!("{:<10} {:<12} {}", route.path, route.name, route.document_title());
                }
            }
        },

        Commands::Route { path } => {
            let table = RouteTable::default();
            match table.resolve(&path) {
                Ok(route) => match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(route)?),
                    OutputFormat::Table => {
                        println!("View:  {}", route.name);
                        println!("Title: {}", route.document_title());
                    }
                },
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber; `RUST_LOG` wins over the config level
fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("foodics_dashboard={}", config.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_posts(store: &PostStore) {
    let page = store.paginated_posts();

    if page.is_empty() {
        if store.search_term().is_empty() {
            println!("No posts available");
        } else {
            println!("No posts match \"{}\"", store.search_term());
        }
        return;
    }

    println!("{:>5}  {:<12} {}", "ID", "Date", "Title");
    println!("{}", "-".repeat(80));
    for post in &page {
        println!("{:>5}  {:<12} {}", post.id, format_date(post), truncate(&post.title, 60));
    }

    println!();
    if let Some((first, last)) = store.page_window() {
        println!(
            "Page {} of {} (posts {}-{} of {})",
            store.current_page(),
            store.total_pages(),
            first,
            last,
            store.filtered_posts().len()
        );
    }
}

fn print_comments(id: u64, comments: &[Comment]) {
    if comments.is_empty() {
        println!("Post {} has no comments", id);
        return;
    }

    println!("{} comments on post {}", comments.len(), id);
    for comment in comments {
        println!();
        println!(
            "{} <{}>",
            comment.name().unwrap_or("(untitled)"),
            comment.email().unwrap_or("unknown")
        );
        if let Some(body) = comment.body() {
            for line in body.lines() {
                println!("  {}", line);
            }
        }
    }
}

fn format_date(post: &Post) -> String {
    post.published_on()
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}
