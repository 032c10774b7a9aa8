use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use moviedeck::app::App;
use moviedeck::cli::Args;
use moviedeck::config::{load_config, load_config_from_path};
use moviedeck::search::HttpMovieSource;

/// Poll timeout while something is moving on screen
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Poll timeout when idle
const IDLE_FRAME: Duration = Duration::from_millis(250);

#[cfg(debug_assertions)]
const DEBUG_LOG_PATH: &str = "/tmp/moviedeck-debug.log";

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let config = args.apply(loaded.config);

    let source = HttpMovieSource::new(&config.search.api_url)?;
    log::debug!("Searching {}", source.base_url());

    let mut app = App::with_source(&config, Arc::new(source));
    app.config_warning = loaded.warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = match execute!(io::stdout(), EnableMouseCapture) {
        Ok(()) => run(terminal, app),
        Err(e) => Err(e.into()),
    };

    // Restore terminal even if the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    app.initialize();

    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| app.render(frame))?;

        let timeout = if app.is_animating(now) {
            ANIMATION_FRAME
        } else {
            IDLE_FRAME
        };

        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    let Ok(file) = std::fs::File::create(DEBUG_LOG_PATH) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
