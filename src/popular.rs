use std::sync::Arc;

use tracing::{debug, error};

use crate::api::MovieSource;
use crate::config::CarouselConfig;
use crate::document::{Document, CAROUSEL_STRIP_ID, POPULAR_CONTAINER_ID};
use crate::view::{self, CarouselView};

/// Fetches the popular-movies list once and renders it into the page's
/// container element as a scrollable card carousel.
pub struct PopularMoviesLoader {
    source: Arc<dyn MovieSource>,
    document: Arc<dyn Document>,
    carousel: CarouselConfig,
}

impl PopularMoviesLoader {
    pub fn new(
        source: Arc<dyn MovieSource>,
        document: Arc<dyn Document>,
        carousel: CarouselConfig,
    ) -> Self {
        Self {
            source,
            document,
            carousel,
        }
    }

    /// Fetch and render. Replaces the container content exactly once:
    /// with the carousel, the no-data placeholder, or the error
    /// placeholder. No-op when the container is not in the document.
    pub async fn load(&self) {
        let Some(container) = self.document.surface(POPULAR_CONTAINER_ID) else {
            return;
        };

        match self.source.popular_movies().await {
            Ok(payload) if !payload.movies.is_empty() => {
                let view = CarouselView::from_movies(&payload.movies, &self.carousel);
                container.replace_html(&view::render_carousel(&view));
                debug!(count = payload.movies.len(), "rendered popular movies");
            }
            Ok(_) => {
                container.replace_html(view::NO_DATA_HTML);
            }
            Err(e) => {
                error!("Failed to load popular movies: {}", e);
                container.replace_html(view::LOAD_ERROR_HTML);
            }
        }
    }

    /// Smooth-scroll the rendered strip by a signed pixel offset. No-op
    /// when no carousel is present in the document.
    pub fn scroll_by(&self, offset: i32) {
        if let Some(strip) = self.document.surface(CAROUSEL_STRIP_ID) {
            strip.scroll_by(offset);
        }
    }
}
