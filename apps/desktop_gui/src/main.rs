mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use clap::Parser;
use client_core::{load_settings, HttpSignupTransport};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{SignupApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "desktop_gui")]
struct Args {
    /// Overrides signup.toml and SIGNUP_ENDPOINT.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = &args.endpoint {
        settings.override_endpoint(endpoint);
    }
    let endpoint = settings.endpoint_url()?;
    tracing::info!(%endpoint, "using signup endpoint");

    let startup = StartupConfig {
        endpoint: endpoint.to_string(),
    };
    let transport = Arc::new(HttpSignupTransport::new(endpoint));

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, transport);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sign up")
            .with_inner_size([480.0, 620.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sign up",
        options,
        Box::new(|_cc| Ok(Box::new(SignupApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
