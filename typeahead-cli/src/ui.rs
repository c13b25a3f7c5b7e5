//! Rendering for the typeahead demo screen.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use typeahead::suggest::SuggestionState;

/// Draws the search input, status line and suggestion list.
pub fn render(frame: &mut Frame, input: &str, state: &SuggestionState) {
    let [input_area, status_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let input_widget = Paragraph::new(input).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search for products"),
    );
    frame.render_widget(input_widget, input_area);

    let status = if state.loading {
        Line::from(Span::styled(
            "  Searching...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled(
            "  Esc to quit",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(status), status_area);

    // The list stays hidden while a request is in flight.
    if !state.loading && !state.suggestions.is_empty() {
        let items: Vec<ListItem> = state
            .suggestions
            .iter()
            .map(|product| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>12}  ", product.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(product.title.clone()),
                ]))
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
            "Suggestions ({})",
            state.suggestions.len()
        )));
        frame.render_widget(list, list_area);
    }
}
