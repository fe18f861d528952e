//! Core enums for screen routing and per-screen view state.

use crate::models::{Book, PageMeta, User};

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Sign-in form. Initial screen when no session token is stored.
    #[default]
    Login,
    /// Account creation form.
    Register,
    /// Paginated catalog table. Initial screen when a token is stored.
    Books,
    /// Single book view.
    BookDetail,
    /// Profile plus reading history.
    Dashboard,
}

/// View state for the catalog screen.
///
/// Owned exclusively by this screen; discarded on navigation. The screen
/// owns the current page number — the table component only renders it.
#[derive(Debug, Clone, Default)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub meta: Option<PageMeta>,
    /// 1-indexed page most recently requested
    pub page: usize,
    pub loading: bool,
    pub selected_key: Option<u64>,
    pub error: Option<String>,
}

impl BooksState {
    /// Key of the row the selection moves to, stepping `delta` rows from the
    /// current one. Selects the first row when nothing is selected yet.
    pub fn step_selection(&self, delta: isize) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        let current = self
            .selected_key
            .and_then(|key| self.items.iter().position(|b| b.id == key));
        let next = match current {
            Some(idx) => {
                let idx = idx as isize + delta;
                idx.clamp(0, self.items.len() as isize - 1) as usize
            }
            None => 0,
        };
        self.items.get(next).map(|b| b.id)
    }
}

/// View state for the book detail screen.
#[derive(Debug, Clone, Default)]
pub struct BookDetailState {
    /// Id being viewed; late responses for other ids are dropped
    pub id: Option<u64>,
    pub book: Option<Book>,
    pub loading: bool,
    pub error: Option<String>,
}

/// View state for the dashboard screen.
///
/// Profile and history are independent fetches; each message updates only
/// its own slice so either resolution order is correct.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub user: Option<User>,
    pub profile_loading: bool,
    pub profile_error: Option<String>,
    pub history: Vec<Book>,
    pub history_meta: Option<PageMeta>,
    pub history_loading: bool,
    pub history_error: Option<String>,
}
