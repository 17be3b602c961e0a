use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use pacemap::{
    app::{App, AppState, Settings},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    geolocation::{parse_position, spawn_locate, ConfiguredLocator},
    persistence::WorkoutStore,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    store::{KeyValueStore, SqliteStore},
    ui::{self, screen_layout},
    workout::Coordinates,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

/// map your runs and rides from the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Record running and cycling workouts by clicking where they happened on a world map. Workouts are kept locally and restored on the next start."
)]
pub struct Cli {
    /// current position as LAT,LNG (falls back to `home` in the config file)
    #[clap(short = 'a', long, value_parser = parse_at)]
    at: Option<Coordinates>,

    /// initial map zoom level
    #[clap(short = 'z', long, value_parser = clap::value_parser!(u8).range(0..=18))]
    zoom: Option<u8>,

    /// workout database file
    #[clap(long)]
    db: Option<PathBuf>,

    /// config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// delete every stored workout and exit
    #[clap(long)]
    reset: bool,
}

fn parse_at(s: &str) -> Result<Coordinates, String> {
    parse_position(s).map_err(|e| e.to_string())
}

impl Cli {
    fn load_config(&self) -> Config {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path).load(),
            None => FileConfigStore::new().load(),
        }
    }

    /// Command line wins over the config file
    fn settings(&self, cfg: &Config) -> Settings {
        let mut settings = Settings::from(cfg);
        if let Some(zoom) = self.zoom {
            settings.initial_zoom = zoom;
        }
        settings
    }

    fn position(&self, cfg: &Config) -> Option<Coordinates> {
        self.at.or(cfg.home)
    }

    fn db_path(&self) -> Option<PathBuf> {
        self.db.clone().or_else(AppDirs::db_path)
    }
}

/// Log to a file in the state dir; stdout belongs to the terminal UI.
/// Logging is best effort and silently off when the file can't be opened.
fn init_logging() {
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn open_store(cli: &Cli, cfg: &Config) -> Result<SqliteStore, Box<dyn Error>> {
    let quota = Some(cfg.storage_quota_bytes);
    let store = match cli.db_path() {
        Some(path) => SqliteStore::open(path, quota)?,
        None => SqliteStore::open_in_memory(quota)?,
    };
    Ok(store)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();
    let cfg = cli.load_config();

    let mut store = WorkoutStore::new(open_store(&cli, &cfg)?);

    if cli.reset {
        store.clear()?;
        tracing::info!("Workouts reset from the command line");
        println!("All workouts deleted.");
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, cli.settings(&cfg));
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    spawn_locate(
        ConfiguredLocator::new(cli.position(&cfg)),
        runner.event_source().sender(),
    );

    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B, S, E, T>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    S: KeyValueStore,
    E: EventSource,
    T: Ticker,
{
    terminal.draw(|f| ui::render(app, f))?;

    while !app.should_quit {
        let layout = {
            let size = terminal.size()?;
            screen_layout(
                Rect::new(0, 0, size.width, size.height),
                app.state == AppState::FormShown,
            )
        };

        let redraw = match runner.step() {
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => true,
            AppEvent::Key(key) => {
                app.handle_key(key, &layout);
                true
            }
            AppEvent::Mouse(mouse) => {
                app.handle_mouse(mouse, &layout);
                true
            }
            AppEvent::Located(outcome) => {
                app.on_located(outcome);
                true
            }
        };

        if redraw {
            terminal.draw(|f| ui::render(app, f))?;
        }
    }

    Ok(())
}
