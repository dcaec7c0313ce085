//! Layout rendering (top bar, sidebar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, ActiveView, AppModel};
use super::utils::{focus_border_style, render_scrollable_list};

pub fn render_top_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),    // App name
            Constraint::Min(0),        // Search input
            Constraint::Length(20),    // Owner
        ])
        .split(area);

    let brand = Paragraph::new("♫ Rhythm Sync")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, chunks[0]);

    let is_focused = model.ui.active_section == ActiveSection::Search;
    let query = model.view.search_query();
    let (search_text, search_style) = if query.is_empty() {
        ("Search tracks, artists, albums...", Style::default().fg(Color::DarkGray))
    } else if is_focused {
        (query, Style::default().fg(Color::Green))
    } else {
        (query, Style::default().fg(Color::White))
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(focus_border_style(is_focused)),
        );
    frame.render_widget(search, chunks[1]);

    let owner = Paragraph::new(format!("👤 {}", model.catalog.owner()))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" User "));
    frame.render_widget(owner, chunks[2]);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui.active_section == ActiveSection::Sidebar;
    let selected = model.ui.sidebar_selected;
    let active = model.view.active();

    let item_style = |i: usize, is_open: bool| {
        if i == selected && is_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_open {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let mut items: Vec<ListItem> = Vec::with_capacity(model.sidebar_len());
    items.push(
        ListItem::new("≡ Library").style(item_style(0, active == ActiveView::Library)),
    );

    let name_width = (area.width as usize).saturating_sub(4 + 12);
    for (i, playlist) in model.catalog.playlists().iter().enumerate() {
        let is_open = active == ActiveView::PlaylistDetail(playlist.id);
        let lock = if playlist.is_public { " " } else { "🔒" };
        let line = Line::from(vec![
            Span::raw(super::utils::truncate_string(&playlist.name, name_width)),
            Span::styled(
                format!(" {:>9} {}", playlist.track_count_label(), lock),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        items.push(ListItem::new(line).style(item_style(i + 1, is_open)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your Playlists ")
        .title_bottom(Line::from(" c: new playlist ").right_aligned())
        .padding(Padding::horizontal(1))
        .border_style(focus_border_style(is_focused));

    render_scrollable_list(frame, area, items, selected, block);
}
