use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
use config::ActivityConfig;

mod github;
use github::GitHubClient;

mod report;

/// Show recent GitHub activity for a user
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// GitHub username to fetch events for
    username: String,
    /// Number of events to show
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,
    /// Configuration file for github-activity
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let config = match &opts.config {
        Some(path) => load_config(path)?,
        None => ActivityConfig::default(),
    };
    debug!("using config {:?}", config);

    let client = GitHubClient::new(&config).context("failed to create GitHub client")?;
    let events = client.user_events(&opts.username).await?;

    for line in report::render(events, opts.limit) {
        println!("{}", line);
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<ActivityConfig> {
    let config_file =
        File::open(path).with_context(|| format!("couldn't open {}:", path.display()))?;
    serde_yaml::from_reader(BufReader::new(config_file)).context("couldn't parse config file")
}
