use std::fs;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::{info, warn};

use menucast_api::{app, config, state, telemetry};
use menucast_provider::{MenuFixture, ResolverFixture};

#[tokio::main]
async fn main() -> Result<()> {
    let args = config::Args::parse();
    let cfg = config::load_config(args.config.as_deref())?;

    telemetry::init(&cfg.telemetry)?;

    let menus = match cfg.menus_file.as_deref() {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading menu fixture {path}"))?;
            serde_json::from_str::<MenuFixture>(&raw)
                .with_context(|| format!("parsing menu fixture {path}"))?
        }
        None => {
            warn!("no menus_file configured, serving an empty menu set");
            MenuFixture::default()
        }
    };

    let resolver = match cfg.resolver_file.as_deref() {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading resolver fixture {path}"))?;
            Some(
                serde_json::from_str::<ResolverFixture>(&raw)
                    .with_context(|| format!("parsing resolver fixture {path}"))?,
            )
        }
        None => None,
    };

    let app_state = state::AppState::new(cfg.clone(), menus, resolver);

    let router = app::build_router(app_state);

    let addr: SocketAddr = cfg.listen_addr.parse()?;
    info!(%addr, "starting menucast-api");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
