//! Client configuration.

/// Default backend base URL, matching a local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Runtime configuration for the client.
///
/// # Example
///
/// ```ignore
/// use shelf::config::ClientConfig;
///
/// let config = ClientConfig::default().with_base_url("https://shelf.example.com/api/v1");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API
    pub base_url: String,
    /// Books fetched per page
    pub per_page: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            per_page: 10,
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Create config from the environment. `SHELF_API_URL` overrides the
    /// backend base URL.
    pub fn from_env() -> Self {
        match std::env::var("SHELF_API_URL") {
            Ok(url) if !url.is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://shelf.example.com/api/v1")
            .with_per_page(25);
        assert_eq!(config.base_url, "https://shelf.example.com/api/v1");
        assert_eq!(config.per_page, 25);
    }

    #[test]
    fn test_per_page_floor() {
        let config = ClientConfig::new().with_per_page(0);
        assert_eq!(config.per_page, 1);
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var("SHELF_API_URL", "http://10.0.0.2:8000/api/v1");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://10.0.0.2:8000/api/v1");
        std::env::remove_var("SHELF_API_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_default() {
        std::env::remove_var("SHELF_API_URL");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }
}
