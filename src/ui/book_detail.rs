//! Book detail screen: all display fields of a single book.

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Book;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SKELETON};

/// Render the book detail screen.
pub fn render_book_detail(frame: &mut Frame, app: &App) {
    let [body_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    let state = &app.detail;
    let title = state
        .book
        .as_ref()
        .map(|b| b.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Book");

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(body_area);
    frame.render_widget(block, body_area);

    let lines = if state.loading {
        skeleton_lines()
    } else if let Some(error) = &state.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        ))]
    } else if let Some(book) = &state.book {
        detail_lines(book)
    } else {
        vec![Line::from(Span::styled(
            "No data available",
            Style::default().fg(COLOR_DIM),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Esc/b back · r refresh · q quit",
            Style::default().fg(COLOR_DIM),
        )))
        .centered(),
        status_area,
    );
}

fn detail_lines(book: &Book) -> Vec<Line<'static>> {
    let fields: [(&str, &String); 10] = [
        ("Subtitle", &book.subtitle),
        ("Authors", &book.authors),
        ("Publisher", &book.publisher),
        ("Published", &book.published_date),
        ("Categories", &book.categories),
        ("Language", &book.language),
        ("Pages", &book.page_count),
        ("Type", &book.print_type),
        ("Rating", &book.average_rating),
        ("Thumbnail", &book.thumbnail),
    ];

    fields
        .into_iter()
        .map(|(label, value)| {
            let value = if value.is_empty() { "—" } else { value.as_str() };
            Line::from(vec![
                Span::styled(format!("{:<12}", label), Style::default().fg(COLOR_DIM)),
                Span::styled(value.to_string(), Style::default().fg(COLOR_ACCENT)),
            ])
        })
        .collect()
}

fn skeleton_lines() -> Vec<Line<'static>> {
    let style = Style::default().fg(COLOR_SKELETON);
    (0..10)
        .map(|_| Line::from(Span::styled("░░░░░░░░░░░░░░░░░░░░░░░░", style)))
        .collect()
}
