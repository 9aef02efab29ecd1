use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use userlist_core::consts::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use userlist_core::{DirectoryHandle, PageLimits, PageRequest, SearchRequest, UserDirectory};

#[derive(Parser)]
#[command(author, version, about = "Paged, alphabet-indexed user name directory")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Newline-delimited name list, grouped by leading letter
    #[arg(long, global = true, default_value = userlist_server::BUNDLED_NAMES_FILE)]
    names_file: PathBuf,

    /// Page size used when a request omits or zeroes it
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    default_page_size: usize,

    /// Largest page size any request may get
    #[arg(long, global = true, default_value_t = MAX_PAGE_SIZE)]
    max_page_size: usize,
}

#[derive(Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    page: i64,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE as i64, allow_negative_numbers = true)]
    size: i64,
}

impl PageArgs {
    fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
    /// Print one page of all names
    Page {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Print one page of names starting with a letter
    Letter {
        letter: char,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Print one page of names containing a substring
    Search {
        query: String,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Print the alphabet summary
    Alphabet,
    /// Print the bucket for one letter
    Bucket { letter: char },
    /// Print the total number of names
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "userlist_server=info,userlist_core=info,tower_http=info".into()
        }))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = PageLimits {
        default_size: cli.default_page_size,
        max_size: cli.max_page_size,
    };
    let directory: DirectoryHandle = Arc::new(
        UserDirectory::open(&cli.names_file, limits)
            .with_context(|| format!("loading {}", cli.names_file.display()))?,
    );

    match cli.command {
        Commands::Serve { addr } => {
            let app = userlist_server::router(directory.clone());
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            tracing::info!(%addr, users = directory.total_count(), "listening");
            axum::serve(listener, app).await?;
        }
        Commands::Page { paging } => print_json(&directory.page(&paging.request()))?,
        Commands::Letter { letter, paging } => {
            print_json(&directory.page_by_letter(letter, &paging.request()))?
        }
        Commands::Search { query, paging } => print_json(&directory.search(
            &SearchRequest::new(query, paging.page, paging.size),
        ))?,
        Commands::Alphabet => print_json(&directory.alphabet())?,
        Commands::Bucket { letter } => print_json(&directory.require_bucket(letter)?)?,
        Commands::Count => println!("{}", directory.total_count()),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
