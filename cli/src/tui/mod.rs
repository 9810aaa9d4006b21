pub mod app;
pub mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use remunera_core::ConfigurationStore;
use tracing::debug;

use crate::tui::app::{App, InputMode};

pub fn run(store: ConfigurationStore, export_dir: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    debug!("Starting TUI for {}", store.date());
    let mut app = App::new(store, export_dir);
    let res = run_app(&mut terminal, &mut app);

    let restored = restore_terminal(&mut terminal);
    finish(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// The event-loop error takes precedence over a failure to restore the terminal.
fn finish(res: io::Result<()>, restored: Result<()>) -> Result<()> {
    res.context("Terminal UI event loop failed")?;
    restored
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else { continue; };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => {
                app.status = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                    KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                    KeyCode::Char('[') => app.previous_year(),
                    KeyCode::Char(']') => app.next_year(),
                    KeyCode::Char('p') => app.toggle_plr(),
                    KeyCode::Char('v') => app.toggle_va(),
                    KeyCode::Char('+') => app.increment_days(),
                    KeyCode::Char('-') => app.decrement_days(),
                    KeyCode::Char('D') => app.enter_days_mode(),
                    KeyCode::Char('c') => app.use_calculated_days(),
                    KeyCode::Char('a') => app.enter_add_mode(),
                    KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Char('e') => app.export(),
                    _ => {}
                }
            },
            InputMode::AddingBenefit | InputMode::EditingDays => {
                match key.code {
                    KeyCode::Enter => app.submit_command(),
                    KeyCode::Esc => app.exit_input_mode(),
                    KeyCode::Char(c) => app.input_char(c),
                    KeyCode::Backspace => app.delete_char(),
                    KeyCode::Left => app.move_cursor_left(),
                    KeyCode::Right => app.move_cursor_right(),
                    _ => {}
                }
            }
        }
    }
}
