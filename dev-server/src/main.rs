//! Development server for the email verification ui
//!
//! Serves the mock verification backend from test-helpers so the ui can be
//! run against every outcome it handles without a real backend.
//!
//! Environment variables (a .env file in the project root also works):
//! - MOCK_BACKEND_IP: bind address, defaults to 127.0.0.1
//! - MOCK_BACKEND_PORT: port, defaults to 5000 (the ui's default API base)
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use test_helpers::mock::{self, ReceivedTokens};
use test_helpers::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[actix_web::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let ip = std::env::var("MOCK_BACKEND_IP")
        .unwrap_or_else(|_| DEFAULT_IP.to_string());
    let port = match std::env::var("MOCK_BACKEND_PORT") {
        Ok(port) => port
            .parse::<u16>()
            .with_context(|| format!("Invalid MOCK_BACKEND_PORT {port:?}"))?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting mock verification backend");
    let (server, port) = mock::build(&ip, port, ReceivedTokens::default())
        .with_context(|| format!("Failed to bind {ip}:{port}"))?;

    let api_base = format!("http://{ip}:{port}/api");
    info!("✅ API: {api_base}");
    info!("   UI:  cd ui && API_BASE_URL={api_base} trunk serve");
    info!("");
    print_links();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    server.await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Log a verification link for each mocked outcome.
fn print_links() {
    let links = [
        (mock::VALID_TOKEN, "verified with message"),
        (mock::QUIET_TOKEN, "verified without message"),
        (mock::DECLINED_TOKEN, "declined with 200"),
        (mock::EXPIRED_TOKEN, "expired (400)"),
        (mock::BROKEN_TOKEN, "server error (500)"),
        (mock::SLOW_TOKEN, "verified after a delay"),
        ("unknown-token", "unknown token (404)"),
    ];

    info!("📬 Verification links (relative to the ui):");
    for (token, outcome) in links {
        info!("   /verify-email/{token:<16} {outcome}");
    }
}
