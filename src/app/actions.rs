//! Async actions: each spawns a task that calls the API and reports the
//! result back as an [`AppMessage`].
//!
//! Actions only touch the state needed to start the operation (loading
//! flags, page numbers); all result handling lives in
//! [`App::apply_message`](super::App::apply_message).

use tracing::debug;

use crate::api::{LoginRequest, RegisterRequest};

use super::{App, AppMessage, BookDetailState, Screen};

impl App {
    /// Submit the login form. No-ops while a login is already in flight or
    /// when client-side validation fails.
    pub fn submit_login(&mut self) {
        if self.login_in_flight || !self.login_form.validate() {
            return;
        }
        self.login_in_flight = true;

        let request = LoginRequest {
            email: self.login_form.email.trim().to_string(),
            password: self.login_form.password.clone(),
        };
        debug!(email = %request.email, "Submitting login");

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.login(&request).await {
                Ok(data) => AppMessage::LoginSucceeded { user: data.user },
                Err(error) => AppMessage::LoginFailed { error },
            };
            let _ = tx.send(message);
        });
    }

    /// Submit the registration form.
    pub fn submit_register(&mut self) {
        if self.register_in_flight || !self.register_form.validate() {
            return;
        }
        self.register_in_flight = true;

        let request = RegisterRequest {
            name: self.register_form.name.trim().to_string(),
            email: self.register_form.email.trim().to_string(),
            password: self.register_form.password.clone(),
        };
        debug!(email = %request.email, "Submitting registration");

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.register(&request).await {
                Ok(()) => AppMessage::RegisterSucceeded,
                Err(error) => AppMessage::RegisterFailed { error },
            };
            let _ = tx.send(message);
        });
    }

    /// Sign out. The token is cleared by the API client before the backend
    /// call, so this always ends in [`AppMessage::LoggedOut`].
    pub fn logout(&mut self) {
        if self.logout_in_flight {
            return;
        }
        self.logout_in_flight = true;

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            // Infallible: backend failures are logged and swallowed
            let _ = api.logout().await;
            let _ = tx.send(AppMessage::LoggedOut);
        });
    }

    /// Fetch a catalog page. The requested page number travels with the
    /// response so stale pages can be dropped on arrival.
    pub fn fetch_books(&mut self, page: usize) {
        let page = page.max(1);
        self.books.page = page;
        self.books.loading = true;
        self.books.error = None;
        debug!(page, "Fetching catalog page");

        let per_page = self.config.per_page;
        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.books(page, per_page).await {
                Ok(result) => AppMessage::BooksLoaded {
                    page_number: page,
                    page: result,
                },
                Err(error) => AppMessage::BooksLoadFailed {
                    page_number: page,
                    error,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Open the detail screen for a book and fetch it.
    pub fn open_book(&mut self, id: u64) {
        self.screen = Screen::BookDetail;
        self.detail = BookDetailState {
            id: Some(id),
            loading: true,
            ..Default::default()
        };
        debug!(id, "Fetching book");

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.book(id).await {
                Ok(book) => AppMessage::BookLoaded { id, book },
                Err(error) => AppMessage::BookLoadFailed { id, error },
            };
            let _ = tx.send(message);
        });
    }

    /// Open the dashboard and fetch profile and history in parallel.
    pub fn open_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.fetch_dashboard();
    }

    /// Refresh both dashboard slices. Profile and history are independent
    /// requests and may resolve in either order.
    pub fn fetch_dashboard(&mut self) {
        self.dashboard.profile_loading = true;
        self.dashboard.profile_error = None;
        self.dashboard.history_loading = true;
        self.dashboard.history_error = None;

        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.profile().await {
                Ok(user) => AppMessage::ProfileLoaded { user },
                Err(error) => AppMessage::ProfileLoadFailed { error },
            };
            let _ = tx.send(message);
        });

        let per_page = self.config.per_page;
        let api = self.api.clone();
        let tx = self.sender();
        tokio::spawn(async move {
            let message = match api.user_history(1, per_page).await {
                Ok(page) => AppMessage::HistoryLoaded { page },
                Err(error) => AppMessage::HistoryLoadFailed { error },
            };
            let _ = tx.send(message);
        });
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use crate::config::ClientConfig;
    use crate::session::SessionStore;

    use super::super::App;

    fn test_app() -> (App, mpsc::UnboundedReceiver<super::AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            App::new(ClientConfig::default(), SessionStore::disabled(), tx),
            rx,
        )
    }

    #[tokio::test]
    async fn test_submit_login_requires_valid_form() {
        let (mut app, _rx) = test_app();
        app.login_form.email = "not-an-email".to_string();
        app.login_form.password = "password123".to_string();

        app.submit_login();

        assert!(!app.login_in_flight);
        assert!(app.login_form.email_error.is_some());
    }

    #[tokio::test]
    async fn test_submit_login_guards_double_submit() {
        let (mut app, _rx) = test_app();
        app.login_form.email = "ada@example.com".to_string();
        app.login_form.password = "password123".to_string();
        app.login_in_flight = true;

        app.submit_login();
        assert!(app.login_in_flight);
    }

    #[tokio::test]
    async fn test_fetch_books_sets_page_and_loading() {
        let (mut app, _rx) = test_app();
        app.fetch_books(3);

        assert_eq!(app.books.page, 3);
        assert!(app.books.loading);
        assert!(app.books.error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_books_clamps_page_to_one() {
        let (mut app, _rx) = test_app();
        app.fetch_books(0);
        assert_eq!(app.books.page, 1);
    }

    #[tokio::test]
    async fn test_open_book_resets_detail_state() {
        let (mut app, _rx) = test_app();
        app.detail.error = Some("old".to_string());

        app.open_book(7);

        assert_eq!(app.screen, super::Screen::BookDetail);
        assert_eq!(app.detail.id, Some(7));
        assert!(app.detail.loading);
        assert!(app.detail.error.is_none());
    }

    #[tokio::test]
    async fn test_open_dashboard_marks_both_slices_loading() {
        let (mut app, _rx) = test_app();
        app.open_dashboard();

        assert_eq!(app.screen, super::Screen::Dashboard);
        assert!(app.dashboard.profile_loading);
        assert!(app.dashboard.history_loading);
    }
}
