use super::escape;

/// Render the suggestion dropdown: one anchor row per suggestion, in
/// order, each linking to the search page with the suggestion as the
/// `q` parameter.
pub fn render_suggestions(suggestions: &[String], search_page: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"list-group\">");
    for text in suggestions {
        out.push_str(&format!(
            "<a href=\"{}?q={}\" class=\"list-group-item list-group-item-action\"><i class=\"fas fa-search text-muted me-2\"></i>{}</a>",
            escape(search_page),
            urlencoding::encode(text),
            escape(text)
        ));
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_in_order_with_search_links() {
        let suggestions = vec!["Inception".to_string(), "Interstellar".to_string()];
        let html = render_suggestions(&suggestions, "/search");

        assert_eq!(html.matches("list-group-item-action").count(), 2);
        assert!(html.contains("href=\"/search?q=Inception\""));
        assert!(html.contains("href=\"/search?q=Interstellar\""));
        assert!(html.find("Inception").unwrap() < html.find("Interstellar").unwrap());
    }

    #[test]
    fn test_query_is_url_encoded_and_text_escaped() {
        let suggestions = vec!["tom & jerry".to_string()];
        let html = render_suggestions(&suggestions, "/search");

        assert!(html.contains("href=\"/search?q=tom%20%26%20jerry\""));
        assert!(html.contains("</i>tom &amp; jerry</a>"));
    }

    #[test]
    fn test_empty_list_renders_empty_group() {
        let html = render_suggestions(&[], "/search");
        assert_eq!(html, "<div class=\"list-group\"></div>");
    }
}
