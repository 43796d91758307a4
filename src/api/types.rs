use std::fmt;

use serde::Deserialize;

/// Payload of `GET /api/popular-movies`. A backend without data may omit
/// the `movies` field entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopularMovies {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// Payload of `GET /api/suggestions?q=...`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// One entry of the popular-movies list, consumed once per render and
/// never cached. Everything beyond title and link is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub year: Option<Year>,
    /// Comma-separated genre list, e.g. "Drama, Romance".
    #[serde(default)]
    pub genre: Option<String>,
}

impl Movie {
    /// First non-empty entry of the comma-separated genre field.
    pub fn first_genre(&self) -> Option<&str> {
        self.genre
            .as_deref()
            .and_then(|g| g.split(',').next())
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

/// The backend serializes ratings either as a JSON number or as a
/// pre-formatted string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{}", n),
            Rating::Text(s) => f.write_str(s),
        }
    }
}

/// Release year, likewise number-or-string on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_with_all_fields() {
        let json = r#"{
            "title": "The Rebel",
            "url": "https://example.org/the-rebel",
            "poster_url": "https://img.example.org/rebel.jpg",
            "rating": 7.2,
            "year": 2007,
            "genre": "Action, History"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "The Rebel");
        assert_eq!(movie.rating.as_ref().unwrap().to_string(), "7.2");
        assert_eq!(movie.year.as_ref().unwrap().to_string(), "2007");
        assert_eq!(movie.first_genre(), Some("Action"));
    }

    #[test]
    fn test_movie_with_string_rating_and_year() {
        let json = r#"{"title": "T", "url": "u", "rating": "8.5", "year": "1998"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.rating.as_ref().unwrap().to_string(), "8.5");
        assert_eq!(movie.year.as_ref().unwrap().to_string(), "1998");
        assert_eq!(movie.first_genre(), None);
    }

    #[test]
    fn test_missing_movies_field() {
        let payload: PopularMovies = serde_json::from_str("{}").unwrap();
        assert!(payload.movies.is_empty());
    }

    #[test]
    fn test_missing_suggestions_field() {
        let payload: Suggestions = serde_json::from_str("{}").unwrap();
        assert!(payload.suggestions.is_empty());
    }

    #[test]
    fn test_first_genre_trims_whitespace() {
        let json = r#"{"title": "T", "url": "u", "genre": " Drama , Romance"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.first_genre(), Some("Drama"));
    }
}
