//! Bookshelf Server - book CRUD and URL cleaning over JSON/HTTP.
//!
//! # Usage
//!
//! ```text
//! GATEWAY_LISTEN=0.0.0.0:8080 DATABASE_URL=sqlite://bookshelf.db?mode=rwc bookshelf-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GATEWAY_LISTEN` | `0.0.0.0:8080` | Bind address |
//! | `DATABASE_URL` | `sqlite://bookshelf.db?mode=rwc` | sqlx SQLite URL |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Pool size |
//! | `CANONICAL_DOMAIN` | `www.byfood.com` | Host pinned by the `redirection` operation |
//! | `CORS_ALLOW_ORIGINS` | `http://localhost:3000` | Comma-separated origins, `*` for any |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `LOG_FORMAT` | *(unset)* | `json` for JSON log lines |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod gateway;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bookshelf_books::{BookStore, Bookshelf, BookshelfHttpHandler};
use bookshelf_core::BookshelfConfig;
use bookshelf_http::cors::CorsPolicy;
use bookshelf_http::service::{BookshelfHttpConfig, BookshelfHttpService};
use bookshelf_url::UrlNormalizer;

use crate::gateway::GatewayService;

/// Server version reported in health check responses.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Whether a `LOG_FORMAT` value selects JSON output.
fn is_json_format(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

/// Build the [`BookshelfHttpConfig`] from the application [`BookshelfConfig`].
fn build_http_config(config: &BookshelfConfig) -> BookshelfHttpConfig {
    BookshelfHttpConfig {
        cors: CorsPolicy::new(config.cors_allow_origins.iter().cloned()),
    }
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve(listener: TcpListener, service: GatewayService<BookshelfHttpHandler>) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Perform a health check by connecting to the server and requesting `/health`.
///
/// Succeeds if the response is 200 OK and reports `"running"`.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request = format!("GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.starts_with("HTTP/1.1 200") && response.contains("\"running\"") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

/// Address to probe for `--health-check`: a wildcard bind is reached via loopback.
fn probe_addr(listen_addr: &str) -> String {
    listen_addr
        .replace("0.0.0.0", "127.0.0.1")
        .replace("[::]", "[::1]")
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = BookshelfConfig::from_env().context("invalid configuration")?;

    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let healthy = run_health_check(&probe_addr(&config.gateway_listen))
            .await
            .is_ok();
        std::process::exit(i32::from(!healthy));
    }

    let json_logs = is_json_format(std::env::var("LOG_FORMAT").ok().as_deref());
    init_tracing(&config.log_level, json_logs)?;

    let normalizer = UrlNormalizer::new(&config.canonical_domain)
        .with_context(|| format!("invalid CANONICAL_DOMAIN: {}", config.canonical_domain))?;

    let store = BookStore::connect(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("failed to open book store at {}", config.database_url))?;

    info!(
        canonical_domain = normalizer.domain(),
        cors_allow_origins = ?config.cors_allow_origins,
        "initializing Bookshelf service",
    );
    let provider = Bookshelf::new(store, normalizer);
    let handler = BookshelfHttpHandler::new(Arc::new(provider));
    let service = BookshelfHttpService::new(Arc::new(handler), build_http_config(&config));
    let gateway = GatewayService::new(service, VERSION);

    let addr: SocketAddr = config
        .gateway_listen
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.gateway_listen))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, version = VERSION, "starting Bookshelf Server");

    serve(listener, gateway).await
}
