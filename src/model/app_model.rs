//! Main application model with session state

use super::catalog::Catalog;
use super::types::{ActiveSection, Overlay, PlaylistId, PlaylistRow, TrackId};
use super::view_state::{ActiveView, ViewState};

/// Focus, selections and overlays for the terminal UI
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// 0 is the "Library" entry, playlists follow
    pub sidebar_selected: usize,
    pub content_selected: usize,
    pub overlay: Option<Overlay>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Sidebar,
            sidebar_selected: 0,
            content_selected: 0,
            overlay: None,
        }
    }
}

/// The row under the content cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentSelection {
    pub track_id: TrackId,
    /// `None` for dangling playlist references
    pub catalog_index: Option<usize>,
}

/// Main application model containing all session state except transport
pub struct AppModel {
    pub catalog: Catalog,
    pub view: ViewState,
    pub ui: UiState,
    share_host: String,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog, share_host: impl Into<String>) -> Self {
        Self {
            catalog,
            view: ViewState::default(),
            ui: UiState::default(),
            share_host: share_host.into(),
            should_quit: false,
        }
    }

    /// Split borrow for playlist editing
    pub fn catalog_and_share_host(&mut self) -> (&mut Catalog, &str) {
        (&mut self.catalog, &self.share_host)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Focus & sidebar
    // ========================================================================

    pub fn cycle_section_forward(&mut self) {
        self.ui.active_section = self.ui.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.ui.active_section = self.ui.active_section.prev();
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui.active_section = section;
    }

    pub fn sidebar_len(&self) -> usize {
        1 + self.catalog.playlists().len()
    }

    /// Playlist under the sidebar cursor; `None` means the Library entry
    pub fn sidebar_playlist(&self) -> Option<PlaylistId> {
        self.ui
            .sidebar_selected
            .checked_sub(1)
            .and_then(|i| self.catalog.playlists().get(i))
            .map(|p| p.id)
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn show_library(&mut self) {
        self.view.show_library();
        self.ui.sidebar_selected = 0;
        self.ui.content_selected = 0;
    }

    pub fn open_playlist(&mut self, id: PlaylistId) -> bool {
        let Some(position) = self.catalog.playlists().iter().position(|p| p.id == id) else {
            return false;
        };
        self.view.select_playlist(id);
        self.ui.sidebar_selected = position + 1;
        self.ui.content_selected = 0;
        true
    }

    pub fn push_search_char(&mut self, c: char) {
        self.view.push_search_char(c);
        self.ui.content_selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.view.pop_search_char();
        self.ui.content_selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.view.clear_search();
        self.ui.content_selected = 0;
    }

    // ========================================================================
    // Content rows
    // ========================================================================

    pub fn content_len(&self) -> usize {
        match self.view.active() {
            ActiveView::Library => self.catalog.tracks().len(),
            ActiveView::PlaylistDetail(id) => {
                self.catalog.playlist(id).map(|p| p.tracks.len()).unwrap_or(0)
            }
            ActiveView::Search => self.catalog.search_tracks(self.view.search_query()).len(),
        }
    }

    pub fn selected_content(&self) -> Option<ContentSelection> {
        let i = self.ui.content_selected;
        match self.view.active() {
            ActiveView::Library => self.catalog.tracks().get(i).map(|t| ContentSelection {
                track_id: t.id,
                catalog_index: Some(i),
            }),
            ActiveView::PlaylistDetail(id) => {
                self.catalog.playlist_rows(id).get(i).map(|row| match row {
                    PlaylistRow::Track { index, track } => ContentSelection {
                        track_id: track.id,
                        catalog_index: Some(*index),
                    },
                    PlaylistRow::Missing(track_id) => ContentSelection {
                        track_id: *track_id,
                        catalog_index: None,
                    },
                })
            }
            ActiveView::Search => self
                .catalog
                .search_tracks(self.view.search_query())
                .get(i)
                .map(|(index, t)| ContentSelection {
                    track_id: t.id,
                    catalog_index: Some(*index),
                }),
        }
    }

    /// Keep the content cursor inside the current row count
    pub fn clamp_content_selection(&mut self) {
        let len = self.content_len();
        if self.ui.content_selected >= len {
            self.ui.content_selected = len.saturating_sub(1);
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.ui.active_section {
            ActiveSection::Sidebar => {
                self.ui.sidebar_selected = self.ui.sidebar_selected.saturating_sub(1);
            }
            ActiveSection::MainContent => {
                self.ui.content_selected = self.ui.content_selected.saturating_sub(1);
            }
            ActiveSection::Search => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.ui.active_section {
            ActiveSection::Sidebar => {
                if self.ui.sidebar_selected < self.sidebar_len().saturating_sub(1) {
                    self.ui.sidebar_selected += 1;
                }
            }
            ActiveSection::MainContent => {
                if self.ui.content_selected < self.content_len().saturating_sub(1) {
                    self.ui.content_selected += 1;
                }
            }
            ActiveSection::Search => {}
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn overlay(&self) -> Option<&Overlay> {
        self.ui.overlay.as_ref()
    }

    pub fn show_overlay(&mut self, overlay: Overlay) {
        self.ui.overlay = Some(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.ui.overlay = None;
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.ui.overlay = Some(Overlay::Notice(message.into()));
    }
}
