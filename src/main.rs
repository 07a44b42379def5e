//! CLI entry point for linkboard.

mod cli;

use clap::Parser;
use linkboard::api::ApiClient;
use linkboard::color::HexColor;
use linkboard::config::{initialize_default_global_config, load_config, Config, GlobalConfigInitResult};
use linkboard::dashboard::{ui_channel, Applied, DashboardFetcher, DashboardStore};
use linkboard::ui::{DashboardView, Palette, Renderer};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "linkboard=warn";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let code = match &args.command {
        Some(cli::Command::Init { force }) => run_init(*force),
        Some(cli::Command::Color { values }) => run_color(values, !args.no_color),
        None => run_dashboard(&args).await,
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_init(force: bool) -> i32 {
    match initialize_default_global_config(force) {
        Ok(GlobalConfigInitResult::Created { path }) => {
            println!("wrote {}", path.display());
            0
        }
        Ok(GlobalConfigInitResult::AlreadyInitialized { path }) => {
            println!("{} already exists (use --force to overwrite)", path.display());
            0
        }
        Ok(GlobalConfigInitResult::Overwritten { path, backup_path }) => {
            println!(
                "wrote {} (previous file saved as {})",
                path.display(),
                backup_path.display()
            );
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_color(values: &[String], color: bool) -> i32 {
    let renderer = Renderer::new(color, Palette::default());
    let mut out = io::stdout().lock();
    for value in values {
        if let Err(e) = renderer.render_color(&mut out, value, HexColor::parse(value)) {
            eprintln!("error: {e}");
            return 1;
        }
    }
    0
}

async fn run_dashboard(args: &cli::Args) -> i32 {
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    apply_cli_overrides(&mut config, args);

    let renderer = Renderer::new(config.display.color, Palette::from_overrides(&config.display.colors));
    let tab = args.tab.unwrap_or(config.display.default_tab);

    let (ui, mut ui_loop) = ui_channel(DashboardStore::new(config.fetch.stale_policy()));
    let fetcher = DashboardFetcher::new(Arc::new(ApiClient::new(&config.api)), ui);

    // The screen is shown once: fetch, wait for the single result, render.
    fetcher.fetch();
    drop(fetcher);
    let applied = ui_loop.next_applied().await;
    let store = ui_loop.into_store();

    let mut code = 0;
    if let Some(Applied::Failed { kind, .. }) = applied {
        if let Err(e) = renderer.render_failure(&mut io::stderr(), kind) {
            eprintln!("error: {e}");
        }
        code = 1;
    }

    let mut out = io::stdout().lock();
    let written = if args.json {
        match store.snapshot() {
            Some(snapshot) => serde_json::to_writer_pretty(&mut out, snapshot)
                .map_err(io::Error::from)
                .and_then(|_| writeln!(out)),
            None => Ok(()),
        }
    } else {
        let view = DashboardView::from_snapshot(store.snapshot(), tab);
        renderer.render_dashboard(&mut out, &view)
    };
    if let Err(e) = written {
        eprintln!("error: {e}");
        code = 1;
    }
    code
}

fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(url) = &args.url {
        config.api.url = url.clone();
    }
    if let Some(token) = &args.token {
        config.api.token = token.clone();
    }
    if args.no_color {
        config.display.color = false;
    }
}
