//! Domain models shared across the API client and the UI.
//!
//! Users and books are read-only from the client's perspective: they are
//! fetched per screen, rendered, and discarded on navigation. Only the
//! session token outlives a screen (see [`crate::session`]).

use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A catalog entry.
///
/// Apart from `id`, every field is an opaque display string; the backend may
/// send numbers for some of them, so deserialization coerces scalars to
/// strings rather than enforcing a type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: u64,
    #[serde(default, deserialize_with = "display_string")]
    pub title: String,
    #[serde(default, deserialize_with = "display_string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "display_string")]
    pub authors: String,
    #[serde(default, deserialize_with = "display_string")]
    pub print_type: String,
    #[serde(default, deserialize_with = "display_string")]
    pub page_count: String,
    #[serde(default, deserialize_with = "display_string")]
    pub publisher: String,
    #[serde(default, deserialize_with = "display_string")]
    pub published_date: String,
    #[serde(default, deserialize_with = "display_string")]
    pub average_rating: String,
    #[serde(default, deserialize_with = "display_string")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "display_string")]
    pub language: String,
    #[serde(default, deserialize_with = "display_string")]
    pub categories: String,
}

/// Pagination metadata attached to list responses.
///
/// `current_page` is 1-indexed. `last_page <= 1` means no pagination
/// controls are needed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: usize,
    pub last_page: usize,
}

/// One page of list results plus optional pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}

impl<T> Page<T> {
    /// Total pages, defaulting to 1 when the backend sent no metadata.
    pub fn total_pages(&self) -> usize {
        self.meta.map(|m| m.last_page.max(1)).unwrap_or(1)
    }

    /// Current page, defaulting to 1 when the backend sent no metadata.
    pub fn current_page(&self) -> usize {
        self.meta.map(|m| m.current_page.max(1)).unwrap_or(1)
    }
}

/// Deserialize a display field from a string, number, boolean, or null.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_string_fields() {
        let book: Book = serde_json::from_str(
            r#"{"id":1,"title":"Dune","authors":"Frank Herbert","page_count":"412"}"#,
        )
        .unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.page_count, "412");
        assert_eq!(book.subtitle, "");
    }

    #[test]
    fn test_book_coerces_numeric_fields_to_strings() {
        let book: Book = serde_json::from_str(
            r#"{"id":2,"title":"Dune","page_count":412,"average_rating":4.5}"#,
        )
        .unwrap();
        assert_eq!(book.page_count, "412");
        assert_eq!(book.average_rating, "4.5");
    }

    #[test]
    fn test_book_null_field_is_empty_string() {
        let book: Book = serde_json::from_str(r#"{"id":3,"title":"Dune","publisher":null}"#).unwrap();
        assert_eq!(book.publisher, "");
    }

    #[test]
    fn test_page_defaults_without_meta() {
        let page: Page<Book> = Page {
            items: vec![],
            meta: None,
        };
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_page_with_meta() {
        let page: Page<Book> = Page {
            items: vec![],
            meta: Some(PageMeta {
                current_page: 2,
                last_page: 5,
            }),
        };
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.total_pages(), 5);
    }

    #[test]
    fn test_user_roundtrip() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
