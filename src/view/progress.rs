//! Now playing bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::PlaybackInfo;
use super::utils::format_duration;

pub fn progress_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

pub fn render_progress_bar(frame: &mut Frame, area: Rect, playback: &PlaybackInfo) {
    let status_text = match playback.track {
        None => " No track loaded".to_string(),
        Some(track) if playback.is_playing => format!(" ▶ {} | {} ", track.title, track.artist),
        Some(track) => format!(" ⏸  {} | {} ", track.title, track.artist),
    };

    let time_str = format!(
        "{} / {}",
        format_duration(playback.current_time),
        format_duration(playback.duration())
    );

    let volume_percent = (playback.volume * 100.0).round() as u8;
    let controls_info = format!(" ⏮ p | space ⏯ | n ⏭ | Vol: {}% ", volume_percent);

    let gauge = Gauge::default()
        .block(
            progress_block()
                .title(status_text)
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(playback.progress_ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}
