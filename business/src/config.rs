use std::any::Any;

use roster_states::{State, state_assign_impl};

/// Connection settings for the random-user API.
///
/// Registered as a state so tests (and a future settings screen) can point
/// the app at a different endpoint; commands read it from their snapshot.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Base URL without a trailing slash, e.g. `https://randomuser.me`.
    pub api_base_url: String,
    /// Batch size requested per page.
    pub results_per_page: u32,
    /// Seed forwarded to the API so pages are reproducible.
    pub seed: Option<String>,
}

impl BusinessConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://randomuser.me".to_string(),
            results_per_page: 10,
            seed: Some("ricks".to_string()),
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_base_url, "https://randomuser.me");
        assert_eq!(config.results_per_page, 10);
        assert_eq!(config.seed.as_deref(), Some("ricks"));
    }

    #[test]
    fn new_overrides_base_url_only() {
        let config = BusinessConfig::new("http://127.0.0.1:8080");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.results_per_page, 10);
    }
}
