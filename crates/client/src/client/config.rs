use crate::client::consts::{BASE_URL, DEFAULT_ENDPOINT, NEXUS_API_BASE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    endpoint: String,
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.config.endpoint = endpoint.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    // Falls back to localhost when NEXUS_API_BASE_URL is unset.
    pub fn new() -> Self {
        Self {
            base_url: std::env::var(NEXUS_API_BASE_URL).unwrap_or_else(|_| BASE_URL.to_string()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Absolute URL every action is POSTed to.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = Config::builder().with_base_url("http://example.test").build();
        assert_eq!(config.endpoint(), "/api/gemini");
        assert_eq!(config.endpoint_url(), "http://example.test/api/gemini");
    }

    #[test]
    fn test_endpoint_url_joins_slashes() {
        let config = Config::builder()
            .with_base_url("http://example.test/")
            .with_endpoint("api/nexus")
            .build();
        assert_eq!(config.endpoint_url(), "http://example.test/api/nexus");
    }
}
