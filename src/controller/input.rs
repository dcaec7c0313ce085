//! Key and mouse event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::model::{ActiveSection, Overlay};
use crate::view::AppView;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Overlays take all input while open
        if let Some(overlay) = self.model.overlay().cloned() {
            self.handle_overlay_key(overlay, key);
            return;
        }

        let section = self.model.ui.active_section;

        // Handle search input when in search section
        if section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        self.model.cycle_section_backward();
                    } else {
                        self.model.cycle_section_forward();
                    }
                    return;
                }
                KeyCode::BackTab => {
                    self.model.cycle_section_backward();
                    return;
                }
                KeyCode::Enter => {
                    self.focus_search_results();
                    return;
                }
                KeyCode::Esc => {
                    self.model.clear_search();
                    return;
                }
                KeyCode::Backspace => {
                    self.model.pop_search_char();
                    return;
                }
                KeyCode::Char(c) => {
                    // Ctrl-q still quits from the search field
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        self.model.set_should_quit(true);
                        return;
                    }
                    self.model.push_search_char(c);
                    return;
                }
                _ => {}
            }
        }

        // Handle MainContent section actions
        if section == ActiveSection::MainContent {
            match key.code {
                KeyCode::Enter => {
                    self.play_selected();
                    return;
                }
                KeyCode::Char('a') | KeyCode::Char('A') => {
                    self.open_add_to_playlist();
                    return;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                    self.remove_selected_from_playlist();
                    return;
                }
                KeyCode::Char('v') | KeyCode::Char('V') => {
                    self.toggle_selected_playlist_visibility();
                    return;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.share_selected_playlist();
                    return;
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true);
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.model.cycle_section_backward();
                } else {
                    self.model.cycle_section_forward();
                }
            }
            KeyCode::BackTab => {
                self.model.cycle_section_backward();
            }
            KeyCode::Up => {
                self.model.move_selection_up();
            }
            KeyCode::Down => {
                self.model.move_selection_down();
            }
            KeyCode::Enter => {
                if section == ActiveSection::Sidebar {
                    self.open_sidebar_item();
                }
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                self.toggle_playback();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.next_track();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.previous_track();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.volume_up();
            }
            KeyCode::Char('-') => {
                self.volume_down();
            }
            KeyCode::Char('>') | KeyCode::Char('.') => {
                self.seek_forward();
            }
            KeyCode::Char('<') | KeyCode::Char(',') => {
                self.seek_backward();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.open_create_playlist();
            }
            // Focus search
            KeyCode::Char('/') | KeyCode::Char('g') | KeyCode::Char('G') => {
                self.model.set_active_section(ActiveSection::Search);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.open_library();
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.model.show_overlay(Overlay::Help);
            }
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, key: KeyEvent) {
        match overlay {
            Overlay::Notice(_) | Overlay::Share { .. } => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.model.close_overlay();
                }
            }
            Overlay::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                    self.model.close_overlay();
                }
            }
            Overlay::CreatePlaylist { mut name } => match key.code {
                KeyCode::Esc => self.model.close_overlay(),
                KeyCode::Enter => self.submit_create_playlist(),
                KeyCode::Backspace => {
                    name.pop();
                    self.model.show_overlay(Overlay::CreatePlaylist { name });
                }
                KeyCode::Char(c) => {
                    name.push(c);
                    self.model.show_overlay(Overlay::CreatePlaylist { name });
                }
                _ => {}
            },
            Overlay::AddToPlaylist { track_id, selected } => match key.code {
                KeyCode::Esc => self.model.close_overlay(),
                KeyCode::Enter => self.submit_add_to_playlist(),
                KeyCode::Up => {
                    self.model.show_overlay(Overlay::AddToPlaylist {
                        track_id,
                        selected: selected.saturating_sub(1),
                    });
                }
                KeyCode::Down => {
                    let last = self.model.catalog.playlists().len().saturating_sub(1);
                    self.model.show_overlay(Overlay::AddToPlaylist {
                        track_id,
                        selected: (selected + 1).min(last),
                    });
                }
                _ => {}
            },
        }
    }

    /// Left click on the progress gauge seeks to the clicked position
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, screen: Rect) {
        if self.model.overlay().is_some() {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let bar = AppView::progress_track_area(screen);
        if bar.width == 0 || mouse.row != bar.y {
            return;
        }
        if mouse.column < bar.x || mouse.column >= bar.x + bar.width {
            return;
        }
        let offset = (mouse.column - bar.x) as f64;
        self.seek_to_fraction(offset / bar.width as f64);
    }
}
