// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod algo;
mod app;
mod data;
mod events;
mod ui;

use app::App;
use data::{ArrayState, GenSettings};
use ui::Theme;

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Pick dark or light from the terminal background.
    Auto,
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "algowatch")]
#[command(about = "Educational TUI that animates classic array algorithms step by step")]
struct Args {
    /// Number of elements to generate (clamped to 5-50)
    #[arg(short = 'n', long, default_value = "20")]
    size: usize,

    /// Largest value to generate (clamped to 10-999)
    #[arg(short, long, default_value = "99")]
    max_value: u32,

    /// Color theme
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeArg,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let theme = match args.theme {
        ThemeArg::Auto => Theme::auto_detect(),
        ThemeArg::Dark => Theme::dark(),
        ThemeArg::Light => Theme::light(),
    };
    let settings = GenSettings { size: args.size, max_value: args.max_value };
    let app = App::new(ArrayState::generate(settings), theme);

    run_tui(app)
}

/// Run the TUI around the given application state
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events until the next step is due (or the idle interval)
        let timeout = app
            .time_until_next_step(Instant::now())
            .map_or(app::IDLE_POLL, |until| until.min(app::IDLE_POLL));
        if let Some(event) = events::poll_event(timeout)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Advance the in-flight run once its pause has elapsed
        app.tick(Instant::now());
    }

    Ok(())
}
