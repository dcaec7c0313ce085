//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn focus_border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

pub fn bordered(title: &str, is_focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(ratatui::widgets::Padding::horizontal(1))
        .border_style(focus_border_style(is_focused))
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Column widths for track tables: (num, title, artist, album, duration)
pub fn track_column_widths(content_width: usize, item_count: usize) -> (usize, usize, usize, usize, usize) {
    // Format: " {num}   {title}   {artist}   {album}   {duration}"
    let num_width = calculate_num_width(item_count);
    let duration_width = 8;
    let fixed_width = 1 + num_width + 3 + 3 + 3 + 3 + duration_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 40) / 100;
    let artist_width = (remaining_width * 30) / 100;
    let album_width = remaining_width.saturating_sub(title_width + artist_width);

    (num_width, title_width, artist_width, album_width, duration_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(9.9), "0:09");
        assert_eq!(format_duration(237.0), "3:57");
        assert_eq!(format_duration(-4.0), "0:00");
        assert_eq!(format_duration(f64::NAN), "0:00");
    }

    #[test]
    fn truncates_with_ellipsis_and_pads() {
        assert_eq!(truncate_string("Electronic Dreams", 10), "Electro...");
        assert_eq!(truncate_string("Jazz", 6), "Jazz  ");
    }

    #[test]
    fn column_widths_fit_content() {
        let (num, title, artist, album, duration) = track_column_widths(100, 5);
        assert_eq!(num, 2);
        assert_eq!(1 + num + 3 + title + 3 + artist + 3 + album + 3 + duration, 100);
    }
}
