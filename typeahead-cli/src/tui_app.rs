//! TUI application loop for the typeahead demo.
//!
//! Keystrokes feed the suggestion daemon through
//! [`SuggestHandle::try_set_query`]; every tick repaints from the latest
//! published [`SuggestionState`](typeahead::suggest::SuggestionState).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use typeahead::suggest::SuggestHandle;

use crate::error::CliError;
use crate::ui;

/// How often the UI polls for input and repaints.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive search UI until Esc or Ctrl-C.
pub fn run_tui(handle: SuggestHandle) -> Result<(), CliError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &handle);

    // Always restore the terminal, even when the loop failed.
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    handle: &SuggestHandle,
) -> Result<(), CliError> {
    let mut input = String::new();

    loop {
        let state = handle.state();
        terminal.draw(|frame| ui::render(frame, &input, &state))?;

        if !event::poll(TICK_INTERVAL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char(c) => {
                input.push(c);
                handle.try_set_query(input.clone());
            }
            KeyCode::Backspace => {
                input.pop();
                handle.try_set_query(input.clone());
            }
            _ => {}
        }
    }

    Ok(())
}
