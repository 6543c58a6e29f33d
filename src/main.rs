use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::KeyEventKind;
use sysmon::app::App;
use sysmon::config::{self, load_config, load_config_from_path};
use sysmon::event::{Event, EventHandler};
use sysmon::{logging, ui};

#[derive(Parser)]
#[command(
    name = "sysmon",
    about = "Live terminal process monitor with per-interval CPU and memory usage"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh interval in seconds (minimum 1)
    #[arg(long)]
    interval: Option<u64>,

    /// Initial sort: cpu, mem, pid
    #[arg(long)]
    sort: Option<String>,

    /// Root of the process table to read instead of /proc
    #[arg(long)]
    proc_root: Option<PathBuf>,

    /// Write diagnostics to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }
    let config = load_config_for_cli(&cli);

    // ratatui::init also installs a panic hook that restores the terminal.
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, config).await;
    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new(app.refresh_interval());

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let interval = app.refresh_interval();
                let action = app.map_key(key);
                app.dispatch(action);
                if app.refresh_interval() != interval {
                    events.set_tick_rate(app.refresh_interval());
                }
            }
            Event::Tick => app.refresh_data(),
            Event::Resize => {}
        }
        if app.running {
            terminal.draw(|frame| ui::draw(frame, &mut app))?;
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(interval) = cli.interval {
        config.general.refresh_interval_secs = interval;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(ref root) = cli.proc_root {
        config.general.proc_root = root.clone();
    }

    config
}
