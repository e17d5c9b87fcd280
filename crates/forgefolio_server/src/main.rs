//! Forgefolio server - one HTTP endpoint over the aggregation library.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use forgefolio::Aggregator;
use forgefolio::bitbucket::{BITBUCKET_API_HOST, BitbucketClient};
use forgefolio::github::{GITHUB_API_HOST, GitHubClient};
use forgefolio::gitlab::{GITLAB_HOST, GitLabClient};
use forgefolio::http::reqwest_transport::ReqwestTransport;
use forgefolio::http::HttpTransport;

#[derive(Parser)]
#[command(name = "forgefolio-server")]
#[command(version)]
#[command(about = "Aggregates public profile data across GitHub, GitLab and Bitbucket")]
#[command(
    long_about = "Serves GET /?q={username}, answering with a three-element JSON array of \
per-platform results (GitHub, GitLab, Bitbucket). Each element is either \
[profile, repositories] or [] when the user is unknown on that platform or \
the platform could not be reached."
)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "FORGEFOLIO_PORT", default_value_t = 3000)]
    port: u16,

    /// Per-request timeout for upstream API calls, in seconds
    #[arg(long, env = "FORGEFOLIO_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// GitHub API base URL
    #[arg(long, env = "FORGEFOLIO_GITHUB_HOST", default_value = GITHUB_API_HOST)]
    github_host: String,

    /// GitLab base URL
    #[arg(long, env = "FORGEFOLIO_GITLAB_HOST", default_value = GITLAB_HOST)]
    gitlab_host: String,

    /// Bitbucket API base URL
    #[arg(long, env = "FORGEFOLIO_BITBUCKET_HOST", default_value = BITBUCKET_API_HOST)]
    bitbucket_host: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,forgefolio=debug")),
        )
        .init();

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::with_timeout(
        Duration::from_secs(cli.timeout_secs),
    )?);
    let aggregator = Aggregator::with_clients(
        GitHubClient::with_host(cli.github_host, Arc::clone(&transport)),
        GitLabClient::with_host(cli.gitlab_host, Arc::clone(&transport)),
        BitbucketClient::with_host(cli.bitbucket_host, transport),
    );

    let app = routes::router(Arc::new(aggregator));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when Ctrl+C is received, letting in-flight requests finish.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown requested");
}
