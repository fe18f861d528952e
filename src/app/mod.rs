//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns all view state. Key events mutate it through
//! [`App::handle_key`]; async API results arrive as [`AppMessage`]s and are
//! applied through [`App::apply_message`]. Rendering reads the state and
//! never mutates it.

mod actions;
mod forms;
mod handlers;
mod messages;
mod types;

pub use forms::{LoginField, LoginForm, RegisterField, RegisterForm, MIN_PASSWORD_LEN};
pub use messages::AppMessage;
pub use types::{BookDetailState, BooksState, DashboardState, Screen};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::session::SessionStore;
use crate::ui::components::Toast;

/// Main application state.
pub struct App {
    /// Data access layer
    pub api: Arc<ApiClient>,
    /// Token storage; shared with the API client
    pub session: SessionStore,
    /// Runtime configuration
    pub config: ClientConfig,
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Active toast notifications, newest last
    pub toasts: Vec<Toast>,
    /// Sign-in form state
    pub login_form: LoginForm,
    /// Account creation form state
    pub register_form: RegisterForm,
    /// Catalog screen state
    pub books: BooksState,
    /// Book detail screen state
    pub detail: BookDetailState,
    /// Dashboard screen state
    pub dashboard: DashboardState,
    /// Duplicate-submit guards, one per mutating operation
    pub login_in_flight: bool,
    pub register_in_flight: bool,
    pub logout_in_flight: bool,
    /// Channel the async actions report back on
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create the app. The initial screen is the catalog when a session
    /// token is stored, otherwise the login form.
    pub fn new(
        config: ClientConfig,
        session: SessionStore,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let api = Arc::new(ApiClient::new(config.base_url.clone(), session.clone()));
        let screen = if session.is_logged_in() {
            Screen::Books
        } else {
            Screen::Login
        };

        Self {
            api,
            session,
            config,
            screen,
            should_quit: false,
            toasts: Vec::new(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            books: BooksState::default(),
            detail: BookDetailState::default(),
            dashboard: DashboardState::default(),
            login_in_flight: false,
            register_in_flight: false,
            logout_in_flight: false,
            tx,
        }
    }

    /// Sender for async action results.
    pub(crate) fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.tx.clone()
    }

    /// Drop expired toasts. Called on the tick timer.
    pub fn tick(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    /// Push a toast, keeping the stack bounded.
    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > 4 {
            self.toasts.remove(0);
        }
    }

    /// Surface an API failure: exactly one toast per failed call, plus a
    /// redirect to the login screen when the session is no longer valid.
    fn on_api_error(&mut self, error: &ApiError) {
        self.push_toast(Toast::error(error.user_message()));
        if error.requires_reauth() && self.screen != Screen::Login {
            self.session.clear();
            self.screen = Screen::Login;
        }
    }

    /// Apply a message from an async operation to the view state.
    ///
    /// Each arm updates only its own state slice, so independent operations
    /// may resolve in any order.
    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::LoginSucceeded { user } => {
                self.login_in_flight = false;
                self.push_toast(Toast::success(format!("Welcome back, {}", user.name)));
                self.login_form.reset();
                self.screen = Screen::Books;
                self.fetch_books(1);
            }
            AppMessage::LoginFailed { error } => {
                self.login_in_flight = false;
                self.on_api_error(&error);
            }
            AppMessage::RegisterSucceeded => {
                self.register_in_flight = false;
                self.push_toast(Toast::success("Account created. Please sign in."));
                // Carry the email over so the user doesn't retype it
                self.login_form.reset();
                self.login_form.email = self.register_form.email.clone();
                self.register_form.reset();
                self.screen = Screen::Login;
            }
            AppMessage::RegisterFailed { error } => {
                self.register_in_flight = false;
                self.on_api_error(&error);
            }
            AppMessage::LoggedOut => {
                self.logout_in_flight = false;
                self.books = BooksState::default();
                self.detail = BookDetailState::default();
                self.dashboard = DashboardState::default();
                self.screen = Screen::Login;
                self.push_toast(Toast::success("Signed out"));
            }
            AppMessage::ProfileLoaded { user } => {
                self.dashboard.profile_loading = false;
                self.dashboard.profile_error = None;
                self.dashboard.user = Some(user);
            }
            AppMessage::ProfileLoadFailed { error } => {
                self.dashboard.profile_loading = false;
                self.dashboard.profile_error = Some(error.user_message());
                self.on_api_error(&error);
            }
            AppMessage::HistoryLoaded { page } => {
                self.dashboard.history_loading = false;
                self.dashboard.history_error = None;
                self.dashboard.history_meta = page.meta;
                self.dashboard.history = page.items;
            }
            AppMessage::HistoryLoadFailed { error } => {
                self.dashboard.history_loading = false;
                self.dashboard.history_error = Some(error.user_message());
                self.on_api_error(&error);
            }
            AppMessage::BooksLoaded { page_number, page } => {
                // Drop responses for a page the user has since left
                if page_number != self.books.page {
                    return;
                }
                self.books.loading = false;
                self.books.error = None;
                self.books.meta = page.meta;
                self.books.items = page.items;
                // Keep the selection only if that row is still present
                if let Some(key) = self.books.selected_key {
                    if !self.books.items.iter().any(|b| b.id == key) {
                        self.books.selected_key = None;
                    }
                }
            }
            AppMessage::BooksLoadFailed { page_number, error } => {
                if page_number != self.books.page {
                    return;
                }
                self.books.loading = false;
                self.books.items.clear();
                self.books.error = Some(error.user_message());
                self.on_api_error(&error);
            }
            AppMessage::BookLoaded { id, book } => {
                if self.detail.id != Some(id) {
                    return;
                }
                self.detail.loading = false;
                self.detail.error = None;
                self.detail.book = Some(book);
            }
            AppMessage::BookLoadFailed { id, error } => {
                if self.detail.id != Some(id) {
                    return;
                }
                self.detail.loading = false;
                self.detail.error = Some(error.user_message());
                self.on_api_error(&error);
            }
        }
    }
}
