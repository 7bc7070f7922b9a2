//! Site server entry point
//!
//! Serves the site over HTTP, or with `--export <dir>` writes the static
//! files and exits.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use site_shared::{logging, process_info, ProcessId, SiteConfig};
use tokio::signal;

use site_server::core::RouteRegistry;
use site_server::state::parse_bind_address;
use site_server::{SiteExporter, SystemClock, WebServer, WebServerState};

#[derive(Parser, Debug)]
#[command(name = "site-server")]
#[command(about = "Multi-city consulting site server")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Public origin used in sitemap and canonical links (overrides SITE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Write sitemap.xml, robots.txt and landing pages into this directory and exit
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();
    let args = Args::parse();

    if args.export.is_some() {
        ProcessId::init_exporter();
    } else {
        ProcessId::init_webserver();
    }
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = SiteConfig::from_env().context("Invalid site configuration")?;
    if let Some(base_url) = &args.base_url {
        config = config
            .with_base_url(base_url)
            .context("Invalid --base-url")?;
    }
    process_info!(ProcessId::current(), "🔧 Base URL: {}", config.base_url());

    let bind_address = parse_bind_address(&args.host, args.port)?;

    let state = WebServerState::new(bind_address, config, RouteRegistry::site_default())
        .with_static_dir(args.static_dir);
    process_info!(
        ProcessId::current(),
        "🔌 Integrations enabled: {}",
        state.integrations.len()
    );

    if let Some(out_dir) = args.export {
        let report = SiteExporter::new(&out_dir)
            .export(&state, &SystemClock::new())
            .await
            .with_context(|| format!("Export to {} failed", out_dir.display()))?;
        logging::log_success(
            ProcessId::current(),
            &format!("Exported {} files", report.files.len()),
        );
        return Ok(());
    }

    let webserver = WebServer::new(state, SystemClock::new());

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
        }
    };

    webserver.run(shutdown).await.context("Web server failed")?;

    logging::log_success(ProcessId::current(), "Site server stopped gracefully");
    Ok(())
}
