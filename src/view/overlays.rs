//! Overlay rendering (notice, share link, create prompt, playlist picker, help)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppModel, Overlay};
use super::utils::render_scrollable_list;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black))
}

pub fn render_overlay(frame: &mut Frame, model: &AppModel, overlay: &Overlay) {
    match overlay {
        Overlay::Notice(message) => render_notice(frame, message),
        Overlay::Share { link } => render_share(frame, link),
        Overlay::CreatePlaylist { name } => render_create_playlist(frame, name),
        Overlay::AddToPlaylist { selected, .. } => render_playlist_picker(frame, model, *selected),
        Overlay::Help => render_help_popup(frame),
    }
}

fn render_notice(frame: &mut Frame, message: &str) {
    let area = frame.area();

    // Fixed width popup (responsive to screen size)
    let popup_width = 52;
    let inner_width = popup_width as usize - 4;
    let line_count = (message.chars().count() as f32 / inner_width as f32).ceil() as u16;
    let popup_area = centered(area, popup_width, 2 + line_count.max(1));

    frame.render_widget(Clear, popup_area);

    let notice = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: false })
        .block(popup_block(" Notice (Esc to dismiss) ", Color::Yellow));

    frame.render_widget(notice, popup_area);
}

fn render_share(frame: &mut Frame, link: &str) {
    let area = frame.area();
    let popup_width = (link.chars().count() as u16 + 6).max(44);
    let popup_area = centered(area, popup_width, 6);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(Span::styled(
            "Share this playlist with your friends:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            link.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    let share = Paragraph::new(lines).block(popup_block(" Share Playlist (Esc to close) ", Color::Magenta));
    frame.render_widget(share, popup_area);
}

fn render_create_playlist(frame: &mut Frame, name: &str) {
    let area = frame.area();
    let popup_area = centered(area, 44, 5);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(name.to_string(), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(Color::Magenta)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: create   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt = Paragraph::new(lines).block(popup_block(" New Playlist ", Color::Magenta));
    frame.render_widget(prompt, popup_area);
}

fn render_playlist_picker(frame: &mut Frame, model: &AppModel, selected: usize) {
    let area = frame.area();
    let playlists = model.catalog.playlists();

    let max_name_len = playlists
        .iter()
        .map(|p| p.name.chars().count() + 4)
        .max()
        .unwrap_or(20);
    let popup_width = (max_name_len as u16 + 6).clamp(30, 60);
    let popup_height = (playlists.len() as u16 + 2).max(4);
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = playlists
        .iter()
        .enumerate()
        .map(|(i, playlist)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("♫ {}", playlist.name)).style(style)
        })
        .collect();

    render_scrollable_list(
        frame,
        popup_area,
        items,
        selected,
        popup_block(" Add to playlist (↑↓ Enter Esc) ", Color::Cyan),
    );
}

fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open / Play"),
        ("/ or G", "Focus search"),
        ("Esc (search)", "Clear search"),
        ("L", "Open library"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play / Pause"),
        ("N", "Next track"),
        ("P", "Previous track"),
        ("< / >", "Seek back / forward"),
        ("+ / -", "Volume up / down"),
        ("Click bar", "Seek to position"),
        ("", ""),
        ("", "── Playlists ──"),
        ("C", "Create playlist"),
        ("A", "Add track to playlist"),
        ("D / Delete", "Remove track from playlist"),
        ("V", "Toggle public / private"),
        ("S", "Share playlist"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_area = centered(area, 62, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(popup_block(" Help (H or Esc to close) ", Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
