//! Generic Data Table Component
//!
//! Renders any row type given an ordered list of column descriptors and an
//! optional pagination descriptor. The table is a pure function of its
//! config: it never fetches data and never tracks the current page — the
//! owning screen maps key presses to a new page number and re-fetches.
//!
//! While loading it renders a fixed-shape skeleton sized to the configured
//! row/column count, so the layout does not shift when data arrives. An
//! empty, non-loading table renders a single placeholder row spanning all
//! columns.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED, COLOR_SKELETON};

/// Glyph run used for one skeleton placeholder cell.
const SKELETON_CELL: &str = "░░░░░░░░";

/// Rows that have an identifying key.
///
/// Selection is tracked by key rather than index, so a selection survives a
/// re-fetch of the same page.
pub trait TableRow {
    fn key(&self) -> u64;
}

/// One column: a header label, a layout width, and a cell accessor.
pub struct TableColumn<R> {
    pub header: &'static str,
    pub width: Constraint,
    pub cell: fn(&R) -> String,
}

/// Pagination descriptor. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationState {
    /// Create a pagination descriptor.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Controls render only when there is more than one page.
    pub fn visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether the "previous" control is enabled.
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The page the "previous" control navigates to, when enabled.
    pub fn prev_page(&self) -> Option<usize> {
        self.prev_enabled().then(|| self.current_page - 1)
    }

    /// The page the "next" control navigates to, when enabled.
    pub fn next_page(&self) -> Option<usize> {
        self.next_enabled().then(|| self.current_page + 1)
    }
}

/// Configuration for rendering a data table.
pub struct DataTableConfig<'a, R: TableRow> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Ordered column descriptors
    pub columns: &'a [TableColumn<R>],
    /// Row data; ignored entirely while loading
    pub rows: &'a [R],
    /// Render the skeleton instead of data
    pub loading: bool,
    /// Skeleton height in rows
    pub skeleton_rows: usize,
    /// Placeholder text for an empty, non-loading table
    pub empty_label: &'a str,
    /// Key of the highlighted row, if any
    pub selected_key: Option<u64>,
    /// Pagination descriptor; hidden when absent or single-page
    pub pagination: Option<PaginationState>,
}

impl<'a, R: TableRow> DataTableConfig<'a, R> {
    /// Create a table config with no selection and no pagination.
    pub fn new(title: &'a str, columns: &'a [TableColumn<R>], rows: &'a [R]) -> Self {
        Self {
            title,
            columns,
            rows,
            loading: false,
            skeleton_rows: 10,
            empty_label: "No data available",
            selected_key: None,
            pagination: None,
        }
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the skeleton height.
    pub fn skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    /// Set the empty-state label.
    pub fn empty_label(mut self, label: &'a str) -> Self {
        self.empty_label = label;
        self
    }

    /// Set the selected row key.
    pub fn selected_key(mut self, key: Option<u64>) -> Self {
        self.selected_key = key;
        self
    }

    /// Set the pagination descriptor.
    pub fn pagination(mut self, pagination: Option<PaginationState>) -> Self {
        self.pagination = pagination;
        self
    }

    /// Number of placeholder cells the skeleton renders.
    pub fn skeleton_cell_count(&self) -> usize {
        self.skeleton_rows * self.columns.len()
    }

    /// Whether the pagination footer renders.
    pub fn pagination_visible(&self) -> bool {
        self.pagination.map(|p| p.visible()).unwrap_or(false)
    }
}

/// Render a data table into `area`.
pub fn render_data_table<R: TableRow>(frame: &mut Frame, area: Rect, config: &DataTableConfig<R>) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (table_area, footer_area) = if config.pagination_visible() {
        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        (table_area, Some(footer_area))
    } else {
        (inner, None)
    };

    let widths: Vec<Constraint> = config.columns.iter().map(|c| c.width).collect();
    let header = Row::new(
        config
            .columns
            .iter()
            .map(|c| Cell::from(Span::styled(c.header, Style::default().fg(COLOR_DIM)))),
    )
    .height(1);

    let rows: Vec<Row> = if config.loading {
        skeleton_rows(config)
    } else if config.rows.is_empty() {
        empty_row(config)
    } else {
        data_rows(config)
    };

    let table = Table::new(rows, widths).header(header);
    frame.render_widget(table, table_area);

    if let (Some(footer_area), Some(pagination)) = (footer_area, config.pagination) {
        render_pagination(frame, footer_area, pagination);
    }
}

fn skeleton_rows<R: TableRow>(config: &DataTableConfig<R>) -> Vec<Row<'static>> {
    let style = Style::default().fg(COLOR_SKELETON);
    (0..config.skeleton_rows)
        .map(|_| {
            Row::new(
                config
                    .columns
                    .iter()
                    .map(|_| Cell::from(Span::styled(SKELETON_CELL, style))),
            )
        })
        .collect()
}

fn empty_row<'a, R: TableRow>(config: &DataTableConfig<'a, R>) -> Vec<Row<'a>> {
    // A single placeholder row spanning all columns: the label in the first
    // cell, the rest blank.
    let mut cells = vec![Cell::from(Span::styled(
        config.empty_label,
        Style::default().fg(COLOR_DIM),
    ))];
    cells.extend(config.columns.iter().skip(1).map(|_| Cell::from("")));
    vec![Row::new(cells)]
}

fn data_rows<'a, R: TableRow>(config: &DataTableConfig<'a, R>) -> Vec<Row<'a>> {
    config
        .rows
        .iter()
        .map(|row| {
            let selected = config.selected_key == Some(row.key());
            let style = if selected {
                Style::default()
                    .fg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            Row::new(
                config
                    .columns
                    .iter()
                    .map(|col| Cell::from(Span::styled((col.cell)(row), style))),
            )
        })
        .collect()
}

fn render_pagination(frame: &mut Frame, area: Rect, pagination: PaginationState) {
    let enabled = Style::default().fg(COLOR_ACCENT);
    let disabled = Style::default().fg(COLOR_DIM);

    let line = Line::from(vec![
        Span::styled(
            "◀ Prev",
            if pagination.prev_enabled() {
                enabled
            } else {
                disabled
            },
        ),
        Span::styled(
            format!("  Page {}/{}  ", pagination.current_page, pagination.total_pages),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            "Next ▶",
            if pagination.next_enabled() {
                enabled
            } else {
                disabled
            },
        ),
    ]);

    frame.render_widget(Paragraph::new(line).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Debug, Clone)]
    struct TestRow {
        id: u64,
        name: String,
    }

    impl TableRow for TestRow {
        fn key(&self) -> u64 {
            self.id
        }
    }

    fn columns() -> Vec<TableColumn<TestRow>> {
        vec![
            TableColumn {
                header: "Id",
                width: Constraint::Length(6),
                cell: |r| r.id.to_string(),
            },
            TableColumn {
                header: "Name",
                width: Constraint::Min(10),
                cell: |r| r.name.clone(),
            },
        ]
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer().clone();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_pagination_first_page() {
        let p = PaginationState::new(1, 5);
        assert!(p.visible());
        assert!(!p.prev_enabled());
        assert!(p.next_enabled());
        assert_eq!(p.prev_page(), None);
        assert_eq!(p.next_page(), Some(2));
    }

    #[test]
    fn test_pagination_last_page() {
        let p = PaginationState::new(5, 5);
        assert!(p.prev_enabled());
        assert!(!p.next_enabled());
        assert_eq!(p.prev_page(), Some(4));
        assert_eq!(p.next_page(), None);
    }

    #[test]
    fn test_pagination_single_page_hidden() {
        let p = PaginationState::new(1, 1);
        assert!(!p.visible());
        assert_eq!(p.prev_page(), None);
        assert_eq!(p.next_page(), None);
    }

    #[test]
    fn test_skeleton_cell_count() {
        let cols = columns();
        let config = DataTableConfig::new("Books", &cols, &[])
            .loading(true)
            .skeleton_rows(10);
        assert_eq!(config.skeleton_cell_count(), 20);
    }

    #[test]
    fn test_loading_renders_skeleton_and_ignores_data() {
        let cols = columns();
        let rows = vec![TestRow {
            id: 1,
            name: "Dune".to_string(),
        }];
        let config = DataTableConfig::new("Books", &cols, &rows)
            .loading(true)
            .skeleton_rows(3);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_data_table(frame, frame.area(), &config))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains('░'));
        assert!(!text.contains("Dune"));
        // One skeleton run per cell
        assert_eq!(text.matches(SKELETON_CELL).count(), 6);
    }

    #[test]
    fn test_empty_renders_single_placeholder_row() {
        let cols = columns();
        let config = DataTableConfig::new("Books", &cols, &[]).empty_label("No data available");

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_data_table(frame, frame.area(), &config))
            .unwrap();

        let text = buffer_text(&terminal);
        assert_eq!(text.matches("No data available").count(), 1);
        assert!(!text.contains('░'));
    }

    #[test]
    fn test_data_rows_render() {
        let cols = columns();
        let rows = vec![
            TestRow {
                id: 1,
                name: "Dune".to_string(),
            },
            TestRow {
                id: 2,
                name: "Hyperion".to_string(),
            },
        ];
        let config = DataTableConfig::new("Books", &cols, &rows);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_data_table(frame, frame.area(), &config))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Dune"));
        assert!(text.contains("Hyperion"));
    }

    #[test]
    fn test_multi_page_renders_footer() {
        let cols = columns();
        let config = DataTableConfig::new("Books", &cols, &[])
            .pagination(Some(PaginationState::new(2, 5)));

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_data_table(frame, frame.area(), &config))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Page 2/5"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_single_page_renders_no_footer() {
        let cols = columns();
        let config = DataTableConfig::new("Books", &cols, &[])
            .pagination(Some(PaginationState::new(1, 1)));

        assert!(!config.pagination_visible());

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_data_table(frame, frame.area(), &config))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("Page 1/1"));
        assert!(!text.contains("Prev"));
    }
}
