//! Rendering layer. All functions here are pure: they read [`App`] state
//! and draw into a frame, never mutating anything.

pub mod book_detail;
pub mod books;
pub mod components;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};
use crate::models::Book;
use components::{render_toasts, TableRow};

impl TableRow for Book {
    fn key(&self) -> u64 {
        self.id
    }
}

/// Render the current screen plus the toast overlay.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Login => login::render_login(frame, app),
        Screen::Register => register::render_register(frame, app),
        Screen::Books => books::render_books(frame, app),
        Screen::BookDetail => book_detail::render_book_detail(frame, app),
        Screen::Dashboard => dashboard::render_dashboard(frame, app),
    }
    render_toasts(frame, area, &app.toasts);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    use crate::config::ClientConfig;
    use crate::models::{Book, PageMeta};
    use crate::session::SessionStore;

    use super::*;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(ClientConfig::default(), SessionStore::disabled(), tx)
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

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

    #[tokio::test]
    async fn test_login_screen_renders_fields() {
        let app = test_app();
        let text = draw(&app);
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("Sign in"));
    }

    #[tokio::test]
    async fn test_books_screen_loading_shows_skeleton() {
        let mut app = test_app();
        app.screen = Screen::Books;
        app.books.loading = true;
        let text = draw(&app);
        assert!(text.contains('░'));
        assert!(text.contains("Books"));
    }

    #[tokio::test]
    async fn test_books_screen_empty_state() {
        let mut app = test_app();
        app.screen = Screen::Books;
        let text = draw(&app);
        assert!(text.contains("No data available"));
    }

    #[tokio::test]
    async fn test_books_screen_renders_rows_and_pagination() {
        let mut app = test_app();
        app.screen = Screen::Books;
        app.books.page = 2;
        app.books.meta = Some(PageMeta {
            current_page: 2,
            last_page: 5,
        });
        app.books.items = vec![Book {
            id: 1,
            title: "Dune".to_string(),
            ..Default::default()
        }];
        let text = draw(&app);
        assert!(text.contains("Dune"));
        assert!(text.contains("Page 2/5"));
    }

    #[tokio::test]
    async fn test_dashboard_renders_profile_and_history() {
        let mut app = test_app();
        app.screen = Screen::Dashboard;
        app.dashboard.user = Some(crate::models::User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });
        let text = draw(&app);
        assert!(text.contains("Profile"));
        assert!(text.contains("Ada"));
        assert!(text.contains("Reading history"));
        assert!(text.contains("No reading history yet"));
    }

    #[tokio::test]
    async fn test_book_detail_renders_fields() {
        let mut app = test_app();
        app.screen = Screen::BookDetail;
        app.detail.id = Some(1);
        app.detail.book = Some(Book {
            id: 1,
            title: "Dune".to_string(),
            authors: "Frank Herbert".to_string(),
            ..Default::default()
        });
        let text = draw(&app);
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
    }

    #[tokio::test]
    async fn test_toast_overlay_renders() {
        let mut app = test_app();
        app.push_toast(components::Toast::error("Something broke"));
        let text = draw(&app);
        assert!(text.contains("Something broke"));
    }
}
