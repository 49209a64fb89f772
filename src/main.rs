use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod config;
mod entries;
mod error;
mod list;
mod navbar;
mod notices;
mod output;
mod scroll;
mod scrollspy;
mod search;
#[cfg(test)]
mod test_utils;

use app::App;
use entries::Catalog;
use notices::NoticeQueue;
use output::OutputFormat;

/// Filterable list with live match highlighting
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Filter a list of items as you type, highlighting every match"
)]
struct Args {
    /// Entries file: JSON array or one item per line (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Apply this query once and print the result instead of opening the UI
    #[arg(short, long)]
    query: Option<String>,

    /// Output format for non-interactive mode
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print every entry without opening the UI
    #[arg(long)]
    no_tui: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/combo-filter-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/combo-filter-debug.log")
            .expect("Failed to open /tmp/combo-filter-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== COMBO-FILTER DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so a broken file is reported before any output
    let config_result = config::load_config();

    let args = Args::parse();

    let catalog = Catalog::read(args.input.as_deref())?;

    if args.query.is_some() || args.no_tui {
        return run_once(&args, &catalog, &config_result);
    }

    let terminal = init_terminal()?;

    let app = App::new(catalog, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    for line in app.output_lines() {
        println!("{}", line);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== COMBO-FILTER DEBUG SESSION ENDED ===");

    Ok(())
}

/// Applies the query once and prints the result, notices going to stderr
fn run_once(args: &Args, catalog: &Catalog, config_result: &config::ConfigResult) -> Result<()> {
    let config = &config_result.config;

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let notices = NoticeQueue::from_config(&config.notices);
    if !notices.is_empty() {
        eprintln!("{}", notices.fallback_text());
    }

    let query = args.query.as_deref().unwrap_or_default();
    let output = output::run_query(catalog, query, args.format, &config.search)?;

    print!("{}", output.stdout);
    if let Some(message) = output.stderr {
        eprintln!("{}", message);
    }

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.show_warning(&warning);
    }

    app.notices.start();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
