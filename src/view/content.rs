//! Main content area rendering (library, playlist detail, search results)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ActiveView, AppModel, PlaybackInfo, PlaylistId, PlaylistRow, Track};
use super::utils::{bordered, format_duration, render_scrollable_list, track_column_widths, truncate_string};

/// One row handed to the track table
enum TableRow<'a> {
    Track { index: usize, track: &'a Track },
    Missing(u32),
}

pub fn render_main_content(frame: &mut Frame, area: Rect, model: &AppModel, playback: &PlaybackInfo) {
    let playing_index = playback.current_track_index;
    let is_focused = model.ui.active_section == ActiveSection::MainContent;
    let selected = model.ui.content_selected;

    match model.view.active() {
        ActiveView::Library => {
            let rows: Vec<TableRow> = model
                .catalog
                .tracks()
                .iter()
                .enumerate()
                .map(|(index, track)| TableRow::Track { index, track })
                .collect();
            render_track_table(frame, area, " Your Library ", &rows, selected, is_focused, playback, playing_index);
        }
        ActiveView::PlaylistDetail(id) => {
            render_playlist_detail(frame, area, model, id, selected, is_focused, playback, playing_index);
        }
        ActiveView::Search => {
            let query = model.view.search_query();
            let title = format!(" Search Results: \"{}\" ", query);
            let results = model.catalog.search_tracks(query);
            if results.is_empty() {
                let message = if query.is_empty() {
                    "Type to search tracks, artists and albums".to_string()
                } else {
                    format!("No tracks found matching \"{}\"", query)
                };
                let empty = Paragraph::new(message)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(bordered(&title, is_focused));
                frame.render_widget(empty, area);
                return;
            }
            let rows: Vec<TableRow> = results
                .into_iter()
                .map(|(index, track)| TableRow::Track { index, track })
                .collect();
            render_track_table(frame, area, &title, &rows, selected, is_focused, playback, playing_index);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_playlist_detail(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    id: PlaylistId,
    selected: usize,
    is_focused: bool,
    playback: &PlaybackInfo,
    playing_index: usize,
) {
    let Some(playlist) = model.catalog.playlist(id) else {
        let gone = Paragraph::new("Playlist not found")
            .style(Style::default().fg(Color::DarkGray))
            .block(bordered(" Playlist ", is_focused));
        frame.render_widget(gone, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let (visibility, visibility_style) = if playlist.is_public {
        (" Public ", Style::default().fg(Color::Black).bg(Color::Green))
    } else {
        (" Private ", Style::default().fg(Color::White).bg(Color::DarkGray))
    };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(playlist.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(visibility, visibility_style),
            Span::styled("  v: toggle  s: share  d: remove", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("{} • Created by {}", playlist.track_count_label(), playlist.owner),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let title = format!(" {} ", playlist.name);
    let rows: Vec<TableRow> = model
        .catalog
        .playlist_rows(id)
        .into_iter()
        .map(|row| match row {
            PlaylistRow::Track { index, track } => TableRow::Track { index, track },
            PlaylistRow::Missing(track_id) => TableRow::Missing(track_id.0),
        })
        .collect();

    if rows.is_empty() {
        let empty = Paragraph::new("This playlist is empty. Add some tracks!")
            .style(Style::default().fg(Color::DarkGray))
            .block(bordered(&title, is_focused));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    render_track_table(frame, chunks[1], &title, &rows, selected, is_focused, playback, playing_index);
}

#[allow(clippy::too_many_arguments)]
fn render_track_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[TableRow],
    selected: usize,
    is_focused: bool,
    playback: &PlaybackInfo,
    playing_index: usize,
) {
    let content_width = area.width.saturating_sub(4) as usize;
    let (num_width, title_width, artist_width, album_width, _) = track_column_widths(content_width, rows.len());

    // Create header as first item
    let mut items: Vec<ListItem> = vec![
        ListItem::new(format!(
            " {:<num_width$}   {:<title_width$}   {:<artist_width$}   {:<album_width$}   {}",
            "#", "Title", "Artist", "Album", "Duration",
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    for (i, row) in rows.iter().enumerate() {
        let line = match row {
            TableRow::Track { index, track } => {
                let is_playing = playback.is_playing && *index == playing_index;
                let indicator = if is_playing { "▶" } else { " " };
                let style = if i == selected && is_focused {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else if is_playing {
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
                } else if i == selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(
                    "{}{:<num_width$}   {}   {}   {}   {}",
                    indicator,
                    i + 1,
                    truncate_string(&track.title, title_width),
                    truncate_string(&track.artist, artist_width),
                    truncate_string(&track.album, album_width),
                    format_duration(track.duration),
                ))
                .style(style)
            }
            TableRow::Missing(id) => {
                let style = if i == selected && is_focused {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(format!(" {:<num_width$}   (missing track #{})", i + 1, id)).style(style)
            }
        };
        items.push(line);
    }

    // +1 for header
    render_scrollable_list(frame, area, items, selected + 1, bordered(title, is_focused));
}
