pub mod api;
pub mod config;
pub mod document;
pub mod popular;
pub mod suggest;
pub mod view;

use std::sync::Arc;

use tracing::info;

use api::ApiClient;
use config::Config;
use document::{Document, POPULAR_CONTAINER_ID, SEARCH_INPUT_ID, SUGGESTIONS_PANEL_ID};
use popular::PopularMoviesLoader;
use suggest::SearchSuggester;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
}

/// Handles to the components wired onto a page. Dropping this without
/// calling [`Attached::detach`] may leave a debounce task running.
pub struct Attached {
    pub loader: Option<Arc<PopularMoviesLoader>>,
    pub suggester: Option<Arc<SearchSuggester>>,
}

impl Attached {
    pub fn detach(&self) {
        if let Some(suggester) = &self.suggester {
            suggester.detach();
        }
    }
}

/// Page-ready wiring: load the popular-movies carousel when its
/// container exists, and attach the search suggester when the input and
/// panel anchors exist. Each flow independently no-ops on missing
/// anchors.
pub async fn attach(
    config: Config,
    document: Arc<dyn Document>,
) -> Result<Attached, FrontendError> {
    let client = Arc::new(ApiClient::new(&config.backend)?);

    let loader = if document.surface(POPULAR_CONTAINER_ID).is_some() {
        info!("Loading popular movies from {}", config.backend.base_url);
        let loader = Arc::new(PopularMoviesLoader::new(
            client.clone(),
            Arc::clone(&document),
            config.carousel.clone(),
        ));
        loader.load().await;
        Some(loader)
    } else {
        None
    };

    let suggester = match (
        document.surface(SEARCH_INPUT_ID),
        document.surface(SUGGESTIONS_PANEL_ID),
    ) {
        (Some(_), Some(panel)) => Some(SearchSuggester::new(client, panel, &config.search)),
        _ => None,
    };

    Ok(Attached { loader, suggester })
}
