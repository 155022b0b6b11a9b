//! Snapcrawl main entry point
//!
//! Command-line interface for the session-aware fixture capture crawler.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

use snapcrawl::browser::ChromeSession;
use snapcrawl::catalog::builtin_catalog;
use snapcrawl::crawler::{CrawlRequest, Orchestrator};
use snapcrawl::session::Credentials;
use snapcrawl::tokens::{Token, TokenMap};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const DEFAULT_TEST_PATH: &str = "doc/test";
const DEFAULT_HTML_PATH: &str = "generated";

/// Snapcrawl: capture rendered HTML snapshots of site views
///
/// Resolves a view selector against the built-in catalog, keeps one browser
/// session logged in/out as the traversal crosses auth boundaries, and saves
/// each rendered page under the test fixture tree.
#[derive(Parser, Debug)]
#[command(name = "snapcrawl")]
#[command(version)]
#[command(about = "Capture rendered HTML snapshots of site views", long_about = None)]
struct Cli {
    /// Base url of site to scrape
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    baseurl: String,

    /// Username to use
    #[arg(short, long)]
    username: Option<String>,

    /// Password to use
    #[arg(short, long)]
    password: Option<String>,

    /// Test folder relative to project root
    #[arg(short, long, default_value = DEFAULT_TEST_PATH)]
    testpath: String,

    /// Folder to save html files
    #[arg(short = 'o', long, default_value = DEFAULT_HTML_PATH)]
    htmlpath: String,

    /// View/view group to scrape
    #[arg(short, long, default_value = "all")]
    view: String,

    /// Show pages in browser, i.e. non-headless mode
    #[arg(short, long)]
    show: bool,

    /// List view/view group options
    #[arg(short, long)]
    list: bool,

    /// Id of opinion
    #[arg(long = "id_opinion", visible_alias = "io", default_value_t = 0)]
    id_opinion: u64,

    /// Id of comment
    #[arg(long = "id_comment", visible_alias = "ic", default_value_t = 0)]
    id_comment: u64,

    /// Id of opinion pending review
    #[arg(long = "pending_opinion", visible_alias = "po", default_value_t = 0)]
    pending_opinion: u64,

    /// Id of opinion under review
    #[arg(long = "under_opinion", visible_alias = "uo", default_value_t = 0)]
    under_opinion: u64,

    /// Id of unacceptable content opinion
    #[arg(long = "fail_opinion", visible_alias = "fo", default_value_t = 0)]
    fail_opinion: u64,

    /// Id of comment pending review
    #[arg(long = "pending_comment", visible_alias = "pc", default_value_t = 0)]
    pending_comment: u64,

    /// Id of comment under review
    #[arg(long = "under_comment", visible_alias = "uc", default_value_t = 0)]
    under_comment: u64,

    /// Id of unacceptable comment opinion
    #[arg(long = "fail_comment", visible_alias = "fc", default_value_t = 0)]
    fail_comment: u64,
}

impl Cli {
    /// Builds the token map in the fixed vocabulary order
    fn token_map(&self) -> TokenMap {
        let mut tokens = TokenMap::new();
        if let Some(username) = &self.username {
            tokens.insert(Token::Username, username.clone());
        }
        tokens.insert(Token::OpinionId, self.id_opinion.to_string());
        tokens.insert(Token::CommentId, self.id_comment.to_string());
        tokens.insert(Token::OpinionPreId, self.pending_opinion.to_string());
        tokens.insert(Token::OpinionPostId, self.under_opinion.to_string());
        tokens.insert(Token::OpinionUaId, self.fail_opinion.to_string());
        tokens.insert(Token::CommentPreId, self.pending_comment.to_string());
        tokens.insert(Token::CommentPostId, self.under_comment.to_string());
        tokens.insert(Token::CommentUaId, self.fail_comment.to_string());
        tokens
    }

    fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let catalog = builtin_catalog()?;

    if cli.list {
        catalog.print_listing()?;
        return Ok(());
    }

    let base_url = Url::parse(&cli.baseurl)?;
    let project_root = project_root()?;

    let request = CrawlRequest {
        selector: cli.view.clone(),
        base_url: base_url.clone(),
        credentials: cli.credentials(),
        tokens: cli.token_map(),
        project_root,
        test_path: cli.testpath.clone(),
        html_path: cli.htmlpath.clone(),
        headless: !cli.show,
    };

    tracing::info!("Scraping views matching '{}' from {}", cli.view, base_url);

    let driver = ChromeSession::launch(request.headless).await?;
    let orchestrator = Orchestrator::new(catalog, request, Box::new(driver));

    let report = orchestrator.run().await?;

    if report.is_empty() {
        tracing::warn!("No views matched selector '{}'", cli.view);
    } else {
        report.print_summary()?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// Honors `RUST_LOG` when set, otherwise defaults to crate-level info.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("snapcrawl=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// The root the output tree hangs off: the parent of the working directory
///
/// The tool is expected to run from a subdirectory of the project (the
/// original layout keeps it beside the test fixtures), so fixtures land
/// relative to the project root. At the filesystem root the working
/// directory itself is used.
fn project_root() -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.parent().map(PathBuf::from).unwrap_or(cwd))
}
