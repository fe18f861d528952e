//! Catalog screen: the paginated books table.

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::Book;
use crate::ui::components::{render_data_table, DataTableConfig, PaginationState, TableColumn};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR};

/// Column layout for the catalog table.
pub fn book_columns() -> Vec<TableColumn<Book>> {
    vec![
        TableColumn {
            header: "Title",
            width: Constraint::Min(24),
            cell: |b| b.title.clone(),
        },
        TableColumn {
            header: "Authors",
            width: Constraint::Length(24),
            cell: |b| b.authors.clone(),
        },
        TableColumn {
            header: "Categories",
            width: Constraint::Length(18),
            cell: |b| b.categories.clone(),
        },
        TableColumn {
            header: "Published",
            width: Constraint::Length(12),
            cell: |b| b.published_date.clone(),
        },
    ]
}

/// Render the catalog screen.
pub fn render_books(frame: &mut Frame, app: &App) {
    let [table_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    let state = &app.books;
    let pagination = state
        .meta
        .map(|m| PaginationState::new(state.page, m.last_page));

    let columns = book_columns();
    let config = DataTableConfig::new("Books", &columns, &state.items)
        .loading(state.loading)
        .skeleton_rows(app.config.per_page)
        .selected_key(state.selected_key)
        .pagination(pagination);
    render_data_table(frame, table_area, &config);

    let status = match &state.error {
        Some(error) => Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            "↑/↓ select · Enter open · ←/→ page · r refresh · d dashboard · l logout · q quit",
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(status).centered(), status_area);
}
