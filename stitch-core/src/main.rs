//! src/main.rs
//! Terminal entry point: parse arguments, load config, start logging, then
//! run the synchronous render → read key → update loop until quit.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use clipr::SystemClipboard;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use stitch_core::{
    AppError, Logger,
    config::{Config, Overrides},
    controller::ModeController,
    model::{AppState, Viewport},
    view::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Browse a directory, mark text files in any order and concatenate them.
#[derive(Debug, Parser)]
#[command(name = "stitch", version)]
struct Cli {
    /// Directory to start in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Output file name, instead of a timestamped one
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not list dot-files
    #[arg(long)]
    no_hidden: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let config = config.apply_overrides(Overrides {
        output_name: cli.output,
        log_level: cli.log_level,
        hide_hidden: cli.no_hidden,
    });

    let log_dir = Config::log_dir()?;
    Logger::init_tracing(&log_dir, &config.log_level).context("Failed to initialize logging")?;
    if let Some(e) = config_error {
        warn!(marker = "CONFIG_FALLBACK", error = %e, "Config unreadable, using defaults");
    }

    let start = resolve_start(cli.path)?;
    info!(marker = "APP_START", dir = %start.display(), "Starting stitch");

    setup_panic_handler();
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, config, start);
    cleanup_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(marker = "APP_FAILED", error = %e, "Application error");
    } else {
        info!("Application exited cleanly");
    }
    result
}

/// Consecutive terminal failures tolerated before the loop gives up.
const MAX_TERMINAL_ERRORS: u32 = 3;

fn run(terminal: &mut AppTerminal, config: Config, start: PathBuf) -> Result<()> {
    let mut state = AppState::new(config, start);
    let controller = ModeController::new();
    let mut renderer = UIRenderer::new();
    let mut clipboard = SystemClipboard::new();
    let mut failures = TerminalFailures::default();

    while !state.quit {
        match step(terminal, &mut state, &controller, &mut renderer, &mut clipboard) {
            Ok(()) => failures.reset(),
            Err(e) => failures.record(e)?,
        }
    }
    Ok(())
}

/// One render and at most one key press.
fn step(
    terminal: &mut AppTerminal,
    state: &mut AppState,
    controller: &ModeController,
    renderer: &mut UIRenderer,
    clipboard: &mut SystemClipboard,
) -> Result<(), AppError> {
    let size = terminal
        .size()
        .map_err(|e| AppError::Terminal(e.to_string()))?;
    state.viewport = Viewport {
        rows: size.height,
        cols: size.width,
    };
    state.refresh_listing();

    terminal
        .draw(|f| renderer.render(f, state))
        .map_err(|e| AppError::Terminal(e.to_string()))?;

    // Resizes and other events just trigger the next redraw.
    if let Event::Key(key) = event::read().map_err(|e| AppError::Terminal(e.to_string()))?
        && key.kind == KeyEventKind::Press
    {
        controller.handle_key(state, key, clipboard);
    }
    Ok(())
}

/// Terminal I/O errors are retried; only a run of them ends the session.
#[derive(Debug, Default)]
struct TerminalFailures {
    consecutive: u32,
}

impl TerminalFailures {
    fn record(&mut self, e: AppError) -> Result<(), AppError> {
        self.consecutive += 1;
        warn!(
            marker = "TERMINAL_ERROR",
            attempt = self.consecutive,
            error = %e,
            "Terminal I/O failed"
        );
        if self.consecutive >= MAX_TERMINAL_ERRORS {
            return Err(e);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.consecutive = 0;
    }
}

fn resolve_start(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let path = path
        .canonicalize()
        .with_context(|| format!("Cannot open {}", path.display()))?;
    if !path.is_dir() {
        bail!("{} is not a directory", path.display());
    }
    Ok(path)
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> AppError {
        AppError::Terminal("broken pipe".into())
    }

    #[test]
    fn isolated_terminal_errors_are_retried() {
        let mut failures = TerminalFailures::default();

        assert!(failures.record(failure()).is_ok());
        assert!(failures.record(failure()).is_ok());
        failures.reset();
        assert!(failures.record(failure()).is_ok());
        assert!(failures.record(failure()).is_ok());
    }

    #[test]
    fn a_run_of_terminal_errors_ends_the_loop() {
        let mut failures = TerminalFailures::default();

        for _ in 1..MAX_TERMINAL_ERRORS {
            assert!(failures.record(failure()).is_ok());
        }
        assert!(matches!(
            failures.record(failure()),
            Err(AppError::Terminal(_))
        ));
    }
}
