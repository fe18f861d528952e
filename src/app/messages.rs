//! AppMessage enum for async communication within the application.
//!
//! Every API call runs in a spawned task and reports back through exactly
//! one of these messages, so each failure produces exactly one toast.

use crate::api::ApiError;
use crate::models::{Book, Page, User};

/// Messages received from async API operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Login succeeded; token already persisted by the API client
    LoginSucceeded { user: User },
    /// Login failed
    LoginFailed { error: ApiError },
    /// Registration succeeded; user still needs to sign in
    RegisterSucceeded,
    /// Registration failed
    RegisterFailed { error: ApiError },
    /// Logout finished; token already cleared
    LoggedOut,
    /// Profile loaded for the dashboard
    ProfileLoaded { user: User },
    /// Profile fetch failed
    ProfileLoadFailed { error: ApiError },
    /// Reading history loaded for the dashboard
    HistoryLoaded { page: Page<Book> },
    /// Reading history fetch failed
    HistoryLoadFailed { error: ApiError },
    /// A catalog page loaded. `page_number` is the page that was requested,
    /// so stale responses can be dropped.
    BooksLoaded { page_number: usize, page: Page<Book> },
    /// A catalog page fetch failed
    BooksLoadFailed { page_number: usize, error: ApiError },
    /// A single book loaded
    BookLoaded { id: u64, book: Book },
    /// A single book fetch failed
    BookLoadFailed { id: u64, error: ApiError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_construction_and_clone() {
        let msg = AppMessage::BooksLoaded {
            page_number: 2,
            page: Page {
                items: vec![],
                meta: None,
            },
        };
        let cloned = msg.clone();
        match cloned {
            AppMessage::BooksLoaded { page_number, page } => {
                assert_eq!(page_number, 2);
                assert!(page.items.is_empty());
            }
            _ => panic!("Expected BooksLoaded variant"),
        }
    }

    #[test]
    fn test_failure_carries_error() {
        let msg = AppMessage::LoginFailed {
            error: ApiError::Unauthenticated,
        };
        match msg {
            AppMessage::LoginFailed { error } => assert_eq!(error, ApiError::Unauthenticated),
            _ => panic!("Expected LoginFailed variant"),
        }
    }
}
