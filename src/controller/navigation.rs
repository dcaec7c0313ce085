//! Navigation-related controller methods (library, playlists, search) and playlist editing

use crate::error::CatalogError;
use crate::log_op_result;
use crate::model::{ActiveSection, ActiveView, Overlay};

use super::AppController;

impl AppController {
    /// Enter from the search field: move focus to the results
    pub fn focus_search_results(&mut self) {
        let query = self.model.view.search_query();
        if query.is_empty() {
            return;
        }
        tracing::debug!(query, results = self.model.content_len(), "Showing search results");
        self.model.set_active_section(ActiveSection::MainContent);
    }

    pub fn open_library(&mut self) {
        self.model.show_library();
        self.model.set_active_section(ActiveSection::MainContent);
    }

    /// Open whatever the sidebar cursor is on
    pub fn open_sidebar_item(&mut self) {
        match self.model.sidebar_playlist() {
            Some(id) => {
                if self.model.open_playlist(id) {
                    tracing::debug!(playlist_id = %id, "Opened playlist");
                    self.model.set_active_section(ActiveSection::MainContent);
                }
            }
            None => self.open_library(),
        }
    }

    // ========================================================================
    // Create playlist prompt
    // ========================================================================

    pub fn open_create_playlist(&mut self) {
        self.model.show_overlay(Overlay::CreatePlaylist { name: String::new() });
    }

    /// Submit the prompt. Blank names keep the prompt open.
    pub fn submit_create_playlist(&mut self) {
        let Some(Overlay::CreatePlaylist { name }) = self.model.overlay().cloned() else {
            return;
        };
        let result = self.editor().create(&name).map(|p| p.id);
        log_op_result!("create_playlist", result);
        if result.is_ok() {
            self.model.close_overlay();
        }
    }

    // ========================================================================
    // Playlist editing from the content pane
    // ========================================================================

    /// Open the add-to-playlist picker for the selected row
    pub fn open_add_to_playlist(&mut self) {
        if matches!(self.model.view.active(), ActiveView::PlaylistDetail(_)) {
            return;
        }
        if self.model.catalog.playlists().is_empty() {
            return;
        }
        if let Some(selection) = self.model.selected_content() {
            self.model.show_overlay(Overlay::AddToPlaylist {
                track_id: selection.track_id,
                selected: 0,
            });
        }
    }

    pub fn submit_add_to_playlist(&mut self) {
        let Some(Overlay::AddToPlaylist { track_id, selected }) = self.model.overlay().cloned() else {
            return;
        };
        self.model.close_overlay();
        let Some(playlist_id) = self.model.catalog.playlists().get(selected).map(|p| p.id) else {
            return;
        };
        let result = self.editor().add_track(playlist_id, track_id);
        log_op_result!("add_track_to_playlist", result);
    }

    pub fn remove_selected_from_playlist(&mut self) {
        let Some(playlist_id) = self.model.view.selected_playlist() else {
            return;
        };
        let Some(selection) = self.model.selected_content() else {
            return;
        };
        let result = self.editor().remove_track(playlist_id, selection.track_id);
        log_op_result!("remove_track_from_playlist", result);
        self.model.clamp_content_selection();
    }

    pub fn toggle_selected_playlist_visibility(&mut self) {
        let Some(playlist_id) = self.model.view.selected_playlist() else {
            return;
        };
        let result = self.editor().toggle_visibility(playlist_id);
        log_op_result!("toggle_playlist_visibility", result);
    }

    /// Share the open playlist, or explain why it cannot be shared
    pub fn share_selected_playlist(&mut self) {
        let Some(playlist_id) = self.model.view.selected_playlist() else {
            return;
        };
        let shared = self.editor().share(playlist_id);
        match shared {
            Ok(link) => {
                tracing::info!(playlist_id = %playlist_id, link = %link, "Playlist shared");
                self.model.show_overlay(Overlay::Share { link });
            }
            Err(CatalogError::PreconditionFailed(notice)) => {
                tracing::debug!(playlist_id = %playlist_id, "Refused to share private playlist");
                self.model.show_notice(notice);
            }
            Err(e) => {
                tracing::debug!(playlist_id = %playlist_id, error = %e, "Share ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::test_support::controller;
    use crate::controller::SHARE_PRIVATE_NOTICE;
    use crate::model::{ActiveSection, ActiveView, Overlay, PlaylistId, TrackId};

    #[test]
    fn sidebar_opens_library_and_playlists() {
        let mut c = controller();
        c.model.ui.sidebar_selected = 1;
        c.open_sidebar_item();
        assert_eq!(c.model.view.active(), ActiveView::PlaylistDetail(PlaylistId(1)));
        assert_eq!(c.model.ui.active_section, ActiveSection::MainContent);

        c.model.ui.sidebar_selected = 0;
        c.open_sidebar_item();
        assert_eq!(c.model.view.active(), ActiveView::Library);
        assert_eq!(c.model.view.selected_playlist(), None);
    }

    #[test]
    fn create_playlist_prompt_reprompts_on_blank_name() {
        let mut c = controller();
        c.open_create_playlist();
        c.model.show_overlay(Overlay::CreatePlaylist { name: "  ".to_string() });
        c.submit_create_playlist();
        assert!(matches!(c.model.overlay(), Some(Overlay::CreatePlaylist { .. })));
        assert_eq!(c.model.catalog.playlists().len(), 2);

        c.model.show_overlay(Overlay::CreatePlaylist { name: "Chill".to_string() });
        c.submit_create_playlist();
        assert_eq!(c.model.overlay(), None);
        assert_eq!(c.model.catalog.playlists().last().map(|p| p.name.as_str()), Some("Chill"));
    }

    #[test]
    fn add_to_playlist_from_library() {
        let mut c = controller();
        c.model.set_active_section(ActiveSection::MainContent);
        c.model.ui.content_selected = 2;
        c.open_add_to_playlist();
        assert_eq!(
            c.model.overlay(),
            Some(&Overlay::AddToPlaylist { track_id: TrackId(2), selected: 0 })
        );
        c.submit_add_to_playlist();
        assert_eq!(c.model.overlay(), None);
        assert_eq!(
            c.model.catalog.playlist(PlaylistId(1)).unwrap().tracks,
            vec![TrackId(0), TrackId(1), TrackId(3), TrackId(2)]
        );

        c.open_add_to_playlist();
        c.submit_add_to_playlist();
        assert_eq!(c.model.catalog.playlist(PlaylistId(1)).unwrap().tracks.len(), 4);
    }

    #[test]
    fn remove_selected_row_and_clamp_cursor() {
        let mut c = controller();
        assert!(c.model.open_playlist(PlaylistId(2)));
        c.model.ui.content_selected = 1;
        c.remove_selected_from_playlist();
        assert_eq!(c.model.catalog.playlist(PlaylistId(2)).unwrap().tracks, vec![TrackId(2)]);
        assert_eq!(c.model.ui.content_selected, 0);
    }

    #[test]
    fn sharing_private_playlist_shows_notice_only() {
        let mut c = controller();
        assert!(c.model.open_playlist(PlaylistId(2)));
        let before = c.model.catalog.playlists().to_vec();
        c.share_selected_playlist();
        assert_eq!(c.model.overlay(), Some(&Overlay::Notice(SHARE_PRIVATE_NOTICE.to_string())));
        assert_eq!(c.model.catalog.playlists(), &before[..]);
    }

    #[test]
    fn sharing_after_toggle_shows_link() {
        let mut c = controller();
        assert!(c.model.open_playlist(PlaylistId(2)));
        c.toggle_selected_playlist_visibility();
        c.share_selected_playlist();
        assert_eq!(
            c.model.overlay(),
            Some(&Overlay::Share { link: "https://rhythmsync.example/playlist/2".to_string() })
        );
    }

    #[test]
    fn enter_on_empty_search_keeps_focus() {
        let mut c = controller();
        c.model.set_active_section(ActiveSection::Search);
        c.focus_search_results();
        assert_eq!(c.model.ui.active_section, ActiveSection::Search);
    }
}
