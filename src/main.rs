use std::io;
use std::time::Duration;

use clap::Parser;
use club_tui::app::App;
use club_tui::cli::Args;
use club_tui::club::{Catalog, Clock, FixedClock, SystemClock};
use club_tui::config::{self, Config};
use club_tui::logging::LoggingConfig;
use club_tui::{event, input, listing, theme, tui, ui};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::load()?;
    let _log_guard = init_logging(&args, &config)?;

    let mut theme_config = config.theme.clone();
    if let Some(name) = &args.theme {
        theme_config.preset = Some(name.clone());
    }
    theme::init(theme_config.into_theme()?);

    let catalog = match args.events.as_ref().or(config.events.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };

    let clock: Box<dyn Clock> = match args.now {
        Some(now) => {
            info!(%now, "clock pinned from command line");
            Box::new(FixedClock(now))
        }
        None => Box::new(SystemClock),
    };

    if args.list {
        let schedule = catalog.schedule(clock.now());
        listing::write_listing(&mut io::stdout().lock(), &schedule)?;
        return Ok(());
    }

    let mut app = App::new(catalog, clock);

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    info!("exiting");
    result
}

/// File logging for the UI, stderr for `--list`. No log directory means no logging.
fn init_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>> {
    let level = match (args.verbose, args.list) {
        (true, _) => Level::DEBUG,
        (false, true) => Level::WARN,
        (false, false) => Level::INFO,
    };
    let mut logging = LoggingConfig::new().with_level(level);

    if !args.list {
        let dir = args
            .log_dir
            .clone()
            .or_else(|| config.log_dir.clone())
            .or_else(config::default_log_dir);
        match dir {
            Some(dir) => logging = logging.with_file_logging(dir),
            None => return Ok(None),
        }
    }

    logging
        .init()
        .map_err(|e| eyre!("failed to initialize logging: {}", e))
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(key) = event::next_key_press(Duration::from_millis(100))? {
            input::handle_key(app, key);
        }
    }

    Ok(())
}
