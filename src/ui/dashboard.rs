//! Dashboard screen: profile card plus reading history table.

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::books::book_columns;
use crate::ui::components::{render_data_table, DataTableConfig};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SKELETON};

/// Render the dashboard screen.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let [profile_area, history_area, status_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_profile(frame, profile_area, app);

    let state = &app.dashboard;
    let columns = book_columns();
    let config = DataTableConfig::new("Reading history", &columns, &state.history)
        .loading(state.history_loading)
        .skeleton_rows(app.config.per_page)
        .empty_label("No reading history yet");
    render_data_table(frame, history_area, &config);

    let status = match &state.history_error {
        Some(error) => Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            "b back to books · r refresh · l logout · q quit",
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(status).centered(), status_area);
}

fn render_profile(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Profile ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = &app.dashboard;
    let lines = if state.profile_loading {
        vec![
            Line::from(Span::styled(
                "░░░░░░░░░░░░░░░░",
                Style::default().fg(COLOR_SKELETON),
            )),
            Line::from(Span::styled(
                "░░░░░░░░░░░░░░░░░░░░░░░░",
                Style::default().fg(COLOR_SKELETON),
            )),
        ]
    } else if let Some(error) = &state.profile_error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_ERROR),
        ))]
    } else if let Some(user) = &state.user {
        vec![
            Line::from(vec![
                Span::styled("Name   ", Style::default().fg(COLOR_DIM)),
                Span::styled(user.name.clone(), Style::default().fg(COLOR_ACCENT)),
            ]),
            Line::from(vec![
                Span::styled("Email  ", Style::default().fg(COLOR_DIM)),
                Span::styled(user.email.clone(), Style::default().fg(COLOR_ACCENT)),
            ]),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No data available",
            Style::default().fg(COLOR_DIM),
        ))]
    };

    frame.render_widget(Paragraph::new(lines), inner);
}
