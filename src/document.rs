use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Element id of the popular-movies container on the home page.
pub const POPULAR_CONTAINER_ID: &str = "popularMovies";
/// Element id of the scrollable strip rendered inside the container.
pub const CAROUSEL_STRIP_ID: &str = "movieScrollContainer";
/// Element id of the search box.
pub const SEARCH_INPUT_ID: &str = "searchInput";
/// Element id of the suggestion dropdown panel.
pub const SUGGESTIONS_PANEL_ID: &str = "suggestions";

/// One writable region of the host page.
pub trait Surface: Send + Sync {
    /// Replace the inner HTML of this element wholesale.
    fn replace_html(&self, html: &str);
    /// Show or hide the element.
    fn set_visible(&self, visible: bool);
    /// Shift the horizontal scroll position by a signed pixel offset.
    fn scroll_by(&self, offset: i32);
}

/// The host page. Components look their anchors up by element id and
/// no-op when an anchor is absent.
pub trait Document: Send + Sync {
    fn surface(&self, id: &str) -> Option<Arc<dyn Surface>>;
}

#[derive(Debug, Clone, Default)]
pub struct ElementState {
    pub html: String,
    pub visible: bool,
    pub scroll_x: i32,
}

/// In-memory document used by the preview binary and by tests. Elements
/// rendered into an existing element's HTML (matched on `id="..."`)
/// become addressable, which is how the carousel strip turns scrollable
/// after a render.
#[derive(Clone, Default)]
pub struct InMemoryDocument {
    inner: Arc<Mutex<HashMap<String, ElementState>>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document pre-seeded with the three anchors the page provides:
    /// movie container, search input, and the (initially hidden)
    /// suggestion panel.
    pub fn with_page_anchors() -> Self {
        let doc = Self::new();
        doc.insert_element(POPULAR_CONTAINER_ID, true);
        doc.insert_element(SEARCH_INPUT_ID, true);
        doc.insert_element(SUGGESTIONS_PANEL_ID, false);
        doc
    }

    pub fn insert_element(&self, id: &str, visible: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.insert(
            id.to_string(),
            ElementState {
                visible,
                ..ElementState::default()
            },
        );
    }

    /// Snapshot of an element's state, if present.
    pub fn element(&self, id: &str) -> Option<ElementState> {
        let mut inner = self.inner.lock().unwrap();
        materialize(&mut inner, id);
        inner.get(id).cloned()
    }
}

impl Document for InMemoryDocument {
    fn surface(&self, id: &str) -> Option<Arc<dyn Surface>> {
        let mut inner = self.inner.lock().unwrap();
        materialize(&mut inner, id);
        if !inner.contains_key(id) {
            return None;
        }
        Some(Arc::new(MemSurface {
            id: id.to_string(),
            inner: Arc::clone(&self.inner),
        }))
    }
}

/// If `id` is not a registered element but appears as an `id="..."`
/// attribute in some rendered HTML, register it.
fn materialize(inner: &mut HashMap<String, ElementState>, id: &str) {
    if inner.contains_key(id) {
        return;
    }
    let needle = format!("id=\"{}\"", id);
    if inner.values().any(|el| el.html.contains(&needle)) {
        inner.insert(
            id.to_string(),
            ElementState {
                visible: true,
                ..ElementState::default()
            },
        );
    }
}

struct MemSurface {
    id: String,
    inner: Arc<Mutex<HashMap<String, ElementState>>>,
}

impl MemSurface {
    fn with_element(&self, f: impl FnOnce(&mut ElementState)) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(el) = inner.get_mut(&self.id) {
            f(el);
        }
    }
}

impl Surface for MemSurface {
    fn replace_html(&self, html: &str) {
        self.with_element(|el| el.html = html.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.with_element(|el| el.visible = visible);
    }

    fn scroll_by(&self, offset: i32) {
        self.with_element(|el| el.scroll_x = (el.scroll_x + offset).max(0));
    }
}
