use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_popular_path")]
    pub popular_path: String,
    #[serde(default = "default_suggestions_path")]
    pub suggestions_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            popular_path: default_popular_path(),
            suggestions_path: default_suggestions_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_page")]
    pub page_path: String,
    /// Quiet period after the last keystroke before a suggestion fetch fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_path: default_search_page(),
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselConfig {
    /// Pixels moved per click on a carousel scroll button.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: i32,
    #[serde(default = "default_poster_placeholder")]
    pub poster_placeholder: String,
    #[serde(default = "default_poster_placeholder_remote")]
    pub poster_placeholder_remote: String,
    #[serde(default = "default_fallback_genre")]
    pub fallback_genre: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            poster_placeholder: default_poster_placeholder(),
            poster_placeholder_remote: default_poster_placeholder_remote(),
            fallback_genre: default_fallback_genre(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_popular_path() -> String {
    "/api/popular-movies".to_string()
}

fn default_suggestions_path() -> String {
    "/api/suggestions".to_string()
}

fn default_search_page() -> String {
    "/search".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_len() -> usize {
    2
}

fn default_scroll_step() -> i32 {
    300
}

fn default_poster_placeholder() -> String {
    "/static/images/no-poster.jpg".to_string()
}

fn default_poster_placeholder_remote() -> String {
    "https://via.placeholder.com/200x280?text=No+Poster".to_string()
}

fn default_fallback_genre() -> String {
    "Movie".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.backend.popular_path, "/api/popular-movies");
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.carousel.scroll_step, 300);
    }

    #[test]
    fn test_partial_override() {
        let yaml = "
backend:
  base_url: https://movies.example.org
search:
  debounce_ms: 150
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.base_url, "https://movies.example.org");
        assert_eq!(config.backend.suggestions_path, "/api/suggestions");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.page_path, "/search");
    }
}
