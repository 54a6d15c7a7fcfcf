//! Command-line entry point.
//!
//! With a problem file, runs the analysis and prints the report as JSON.
//! Without one, serves the HTTP API.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ahp_decision::adapters::{api_router, FileProblemSource};
use ahp_decision::application::RunAnalysisHandler;
use ahp_decision::config::{AppConfig, ServerConfig};
use ahp_decision::ports::ProblemSource;

#[derive(Parser, Debug)]
#[command(name = "ahp-decision")]
#[command(about = "Rank alternatives with the Analytic Hierarchy Process", long_about = None)]
struct Args {
    /// Problem file (.json, .yaml, .yml). Starts the HTTP server when omitted.
    problem: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    match args.problem {
        Some(path) => run_file(&config, path).await,
        None => serve(config).await,
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

async fn run_file(config: &AppConfig, path: PathBuf) -> anyhow::Result<()> {
    let source = FileProblemSource::new(".");
    let problem = source.load(&path.to_string_lossy()).await?;

    let report = RunAnalysisHandler::new(config.analysis.clone()).handle(problem)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;

    let app = api_router(config.analysis.clone())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
