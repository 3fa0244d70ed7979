// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The music player: play/pause button, times and progress bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlaybackState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_WAIT},
    util::format::format_optional_time,
};

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(15)])
        .split(rows[0]);

    // The button shows what pressing it will do.
    let (icon, label) = match app.player.state() {
        PlaybackState::Playing => (ICON_PAUSE, "Pause"),
        PlaybackState::Paused if app.player.is_play_pending() => (ICON_WAIT, "Starting"),
        PlaybackState::Paused => (ICON_PLAY, "Play"),
    };

    let button = Line::from(vec![
        Span::styled(
            format!(" {} {} ", icon, label),
            Style::default()
                .fg(app.theme.text_colour)
                .bg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(button), chunks[0]);

    let time_line = Line::from(vec![
        Span::raw(format_optional_time(app.player.position())).fg(app.theme.accent_colour),
        Span::raw(" / ").fg(app.theme.text_colour),
        Span::raw(format_optional_time(app.player.duration())).fg(app.theme.accent_colour),
    ]);
    f.render_widget(
        Paragraph::new(time_line).alignment(Alignment::Right),
        chunks[1],
    );

    let ratio = (app.player.current_progress() / 100.0).clamp(0.0, 1.0);
    let progress_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.gradient[0])
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true);

    f.render_widget(progress_gauge, rows[1]);
}
