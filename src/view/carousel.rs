use super::escape;
use crate::api::Movie;
use crate::config::CarouselConfig;
use crate::document::CAROUSEL_STRIP_ID;

/// Shown in place of the carousel when the backend returns no movies.
pub const NO_DATA_HTML: &str =
    r#"<div class="col-12 text-center"><p>No movie data available.</p></div>"#;

/// Shown in place of the carousel when the fetch fails.
pub const LOAD_ERROR_HTML: &str =
    r#"<div class="col-12 text-center text-danger"><p>Failed to load movie data.</p></div>"#;

/// View-model for the whole carousel strip.
#[derive(Debug, Clone)]
pub struct CarouselView {
    pub cards: Vec<CardView>,
    pub scroll_step: i32,
}

/// View-model for one movie card, with all display fallbacks already
/// applied so rendering is pure string assembly.
#[derive(Debug, Clone)]
pub struct CardView {
    pub title: String,
    pub url: String,
    /// Ordered poster sources, best first. Always non-empty; entries
    /// after the first are emitted as `data-fallback-N` attributes for a
    /// single host-side image error handler.
    pub poster_sources: Vec<String>,
    pub rating: String,
    pub caption: String,
}

impl CarouselView {
    pub fn from_movies(movies: &[Movie], config: &CarouselConfig) -> Self {
        Self {
            cards: movies.iter().map(|m| CardView::from_movie(m, config)).collect(),
            scroll_step: config.scroll_step,
        }
    }
}

impl CardView {
    pub fn from_movie(movie: &Movie, config: &CarouselConfig) -> Self {
        let mut poster_sources = Vec::with_capacity(3);
        if let Some(poster) = movie.poster_url.as_deref().filter(|p| !p.is_empty()) {
            poster_sources.push(poster.to_string());
        }
        poster_sources.push(config.poster_placeholder.clone());
        poster_sources.push(config.poster_placeholder_remote.clone());

        let rating = movie
            .rating
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "N/A".to_string());

        let year = movie
            .year
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let genre = movie
            .first_genre()
            .unwrap_or(config.fallback_genre.as_str());

        Self {
            title: movie.title.clone(),
            url: movie.url.clone(),
            poster_sources,
            rating,
            caption: format!("{} • {}", year, genre),
        }
    }
}

/// Render the carousel wrapper: left scroll button, the strip of cards
/// in input order, right scroll button. Buttons carry the signed scroll
/// step in a `data-scroll` attribute; the host wires them to the scroll
/// helper.
pub fn render_carousel(view: &CarouselView) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"movie-carousel-wrapper\">");
    out.push_str(&format!(
        "<button class=\"scroll-btn scroll-left\" data-scroll=\"{}\"><i class=\"fas fa-chevron-left\"></i></button>",
        -view.scroll_step
    ));
    out.push_str(&format!(
        "<div class=\"scrolling-wrapper\" id=\"{}\">",
        CAROUSEL_STRIP_ID
    ));
    for card in &view.cards {
        render_card(&mut out, card);
    }
    out.push_str("</div>");
    out.push_str(&format!(
        "<button class=\"scroll-btn scroll-right\" data-scroll=\"{}\"><i class=\"fas fa-chevron-right\"></i></button>",
        view.scroll_step
    ));
    out.push_str("</div>");
    out
}

fn render_card(out: &mut String, card: &CardView) {
    let title = escape(&card.title);

    out.push_str("<div class=\"card-fixed-width\"><div class=\"card h-100 movie-card\">");
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"text-decoration-none text-dark\">",
        escape(&card.url)
    ));

    out.push_str("<div class=\"position-relative\">");
    out.push_str(&format!(
        "<img src=\"{}\" class=\"card-img-top\" alt=\"{}\"",
        escape(&card.poster_sources[0]),
        title
    ));
    for (i, fallback) in card.poster_sources[1..].iter().enumerate() {
        out.push_str(&format!(" data-fallback-{}=\"{}\"", i + 1, escape(fallback)));
    }
    out.push_str(">");
    out.push_str(&format!(
        "<div class=\"movie-rating\"><i class=\"fas fa-star text-warning\"></i> {}</div>",
        escape(&card.rating)
    ));
    out.push_str("</div>");

    out.push_str("<div class=\"card-body p-2\">");
    out.push_str(&format!(
        "<h6 class=\"card-title text-truncate mb-1\" title=\"{}\">{}</h6>",
        title, title
    ));
    out.push_str(&format!(
        "<p class=\"card-text small text-muted mb-0\">{}</p>",
        escape(&card.caption)
    ));
    out.push_str("</div></a></div></div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: i64) -> Movie {
        serde_json::from_str(&format!(
            r#"{{"title": "{}", "url": "https://example.org/m", "year": {}}}"#,
            title, year
        ))
        .unwrap()
    }

    #[test]
    fn test_one_card_per_movie_in_input_order() {
        let movies = vec![movie("First Film", 2001), movie("Second Film", 2002)];
        let view = CarouselView::from_movies(&movies, &CarouselConfig::default());
        let html = render_carousel(&view);

        assert_eq!(html.matches("movie-card").count(), 2);
        let first = html.find("First Film").unwrap();
        let second = html.find("Second Film").unwrap();
        assert!(first < second);
        assert!(html.contains("2001 •"));
        assert!(html.contains("2002 •"));
    }

    #[test]
    fn test_strip_carries_known_id_and_scroll_buttons() {
        let view = CarouselView::from_movies(&[movie("M", 2000)], &CarouselConfig::default());
        let html = render_carousel(&view);

        assert!(html.contains("id=\"movieScrollContainer\""));
        assert!(html.contains("data-scroll=\"-300\""));
        assert!(html.contains("data-scroll=\"300\""));
    }

    #[test]
    fn test_missing_optionals_fall_back() {
        let movie: Movie =
            serde_json::from_str(r#"{"title": "Bare", "url": "u"}"#).unwrap();
        let card = CardView::from_movie(&movie, &CarouselConfig::default());

        assert_eq!(card.rating, "N/A");
        assert_eq!(card.caption, " • Movie");
        // No poster: local placeholder first, remote placeholder as the
        // only remaining fallback.
        assert_eq!(card.poster_sources[0], "/static/images/no-poster.jpg");
        assert_eq!(
            card.poster_sources[1],
            "https://via.placeholder.com/200x280?text=No+Poster"
        );
    }

    #[test]
    fn test_poster_fallback_chain_in_markup() {
        let movie: Movie = serde_json::from_str(
            r#"{"title": "T", "url": "u", "poster_url": "https://img/p.jpg"}"#,
        )
        .unwrap();
        let view = CarouselView::from_movies(&[movie], &CarouselConfig::default());
        let html = render_carousel(&view);

        assert!(html.contains("src=\"https://img/p.jpg\""));
        assert!(html.contains("data-fallback-1=\"/static/images/no-poster.jpg\""));
        assert!(html
            .contains("data-fallback-2=\"https://via.placeholder.com/200x280?text=No+Poster\""));
    }

    #[test]
    fn test_payload_text_is_escaped() {
        let movie: Movie = serde_json::from_str(
            r#"{"title": "<script>alert(1)</script>", "url": "https://e/?a=1&b=2"}"#,
        )
        .unwrap();
        let view = CarouselView::from_movies(&[movie], &CarouselConfig::default());
        let html = render_carousel(&view);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("href=\"https://e/?a=1&amp;b=2\""));
    }

    #[test]
    fn test_placeholders_contain_no_cards() {
        assert!(NO_DATA_HTML.contains("No movie data available."));
        assert!(LOAD_ERROR_HTML.contains("Failed to load movie data."));
        assert!(!NO_DATA_HTML.contains("movie-card"));
        assert!(!LOAD_ERROR_HTML.contains("movie-card"));
    }
}
