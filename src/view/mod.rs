//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, sidebar)
//! - `content`: Main content area rendering
//! - `progress`: Now playing bar rendering
//! - `overlays`: Modal overlays (notice, share, create, add to playlist, help)

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::model::{AppModel, PlaybackInfo};

pub struct AppView;

impl AppView {
    fn root_chunks(screen: Rect) -> Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Brand + search + owner
                Constraint::Min(0),    // Main content (sidebar + content)
                Constraint::Length(3), // Now playing bar
            ])
            .split(screen)
    }

    /// Screen region of the progress gauge, used to map mouse clicks to seek fractions
    pub fn progress_track_area(screen: Rect) -> Rect {
        let chunks = Self::root_chunks(screen);
        progress::progress_block().inner(chunks[2])
    }

    pub fn render(frame: &mut Frame, model: &AppModel, playback: &PlaybackInfo) {
        let chunks = Self::root_chunks(frame.area());

        layout::render_top_bar(frame, chunks[0], model);

        // Middle: Sidebar (Library + Playlists) and Main Content
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(70),
            ])
            .split(chunks[1]);

        layout::render_sidebar(frame, main_chunks[0], model);
        content::render_main_content(frame, main_chunks[1], model, playback);

        progress::render_progress_bar(frame, chunks[2], playback);

        if let Some(overlay) = model.overlay() {
            overlays::render_overlay(frame, model, overlay);
        }
    }
}
