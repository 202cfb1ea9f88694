use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use corebars::app::{App, ViewMode};
use corebars::config::{self, load_config, load_config_from_path};
use corebars::event::{Event, EventHandler};
use corebars::net::endpoint::{api_endpoint, ws_endpoint};
use corebars::net::http::{MetricsClient, spawn_poller};
use corebars::net::stream::spawn_stream;
use corebars::ui;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(
    name = "corebars",
    about = "Terminal viewer for live per-core CPU telemetry"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server base URL, e.g. http://127.0.0.1:8082
    #[arg(long)]
    server: Option<String>,

    /// Viewer mode: poll-json, poll-bars, live-bars
    #[arg(long)]
    mode: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Append log output to this file (logging is off without it; writing to
    /// stderr would corrupt the display)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = load_config_for_cli(&cli);

    let mode = ViewMode::from_str_config(
        cli.mode
            .as_deref()
            .unwrap_or(&config.general.default_mode),
    );
    let server = Url::parse(&config.general.server_url)?;

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config, mode, server).await;

    ratatui::restore();

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    config: config::Config,
    mode: ViewMode,
    server: Url,
) -> Result<()> {
    let mut app = App::new(&config, mode, server.clone());
    let mut events = EventHandler::new();
    let period = Duration::from_millis(config.general.poll_interval_ms);

    let _net_task = match mode {
        ViewMode::PollJson => {
            let client = MetricsClient::new(api_endpoint(&server)?);
            spawn_poller(
                period,
                move || {
                    let client = client.clone();
                    async move { client.fetch_raw().await }
                },
                events.sender(),
            )
        }
        ViewMode::PollBars => {
            let client = MetricsClient::new(api_endpoint(&server)?);
            spawn_poller(
                period,
                move || {
                    let client = client.clone();
                    async move { client.fetch_bars().await }
                },
                events.sender(),
            )
        }
        ViewMode::LiveBars => spawn_stream(ws_endpoint(&server)?, events.sender()),
    };

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
            }
            Event::Resize => {}
            Event::Update(update) => app.apply_update(update),
        }
        terminal.draw(|frame| ui::draw(frame, &app))?;
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref server) = cli.server {
        config.general.server_url = server.clone();
    }
    if let Some(rate) = cli.refresh_rate {
        config.general.poll_interval_ms = rate;
    }

    config
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
