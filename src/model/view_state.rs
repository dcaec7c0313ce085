//! Top-level view selection: library, playlist detail or search

use super::types::PlaylistId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Library,
    PlaylistDetail(PlaylistId),
    Search,
}

/// Tracks the active view and the search query.
///
/// The selected playlist is held by id so the detail view always renders the
/// catalog's current copy.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    active: ActiveView,
    search_query: String,
}

impl ViewState {
    pub fn active(&self) -> ActiveView {
        self.active
    }

    pub fn selected_playlist(&self) -> Option<PlaylistId> {
        match self.active {
            ActiveView::PlaylistDetail(id) => Some(id),
            _ => None,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn show_library(&mut self) {
        self.active = ActiveView::Library;
    }

    pub fn select_playlist(&mut self, id: PlaylistId) {
        self.active = ActiveView::PlaylistDetail(id);
    }

    /// Replace the query. A non-empty query switches to search; clearing it
    /// leaves the current view alone.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        if !self.search_query.is_empty() {
            self.active = ActiveView::Search;
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.search_query);
        query.push(c);
        self.set_search_query(query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = std::mem::take(&mut self.search_query);
        query.pop();
        self.set_search_query(query);
    }

    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }
}
