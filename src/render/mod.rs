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

//! Card rendering.
//!
//! [`draw`] lays out the card top to bottom: title, slideshow, the reveal
//! button and its message, then the music player. Hearts float in the
//! margins either side of the card.

mod hearts;
mod icons;
mod player;
mod slideshow;

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    App,
    render::{
        hearts::HeartsWidget,
        icons::{ICON_HEART, ICON_SPARKLE},
        player::draw_player,
        slideshow::draw_slideshow,
    },
};

const MAX_CARD_WIDTH: u16 = 90;

// One full sweep of the title gradient.
const SHIMMER_PERIOD: Duration = Duration::from_secs(4);

/// Renders the whole card into the frame.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let [card] = Layout::horizontal([Constraint::Max(MAX_CARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    f.render_widget(
        HeartsWidget::new(&app.hearts, app.theme.heart_colour).around(card),
        area,
    );

    let message_height = if app.message_visible { 4 } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(message_height),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(card);

    draw_title(f, rows[0], app);
    draw_slideshow(f, rows[1], app);
    draw_reveal_button(f, rows[2], app);
    if app.message_visible {
        draw_message(f, rows[3], app);
    }
    draw_player(f, rows[4], app);
    draw_help(f, rows[5], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let phase = app.mounted_at.elapsed().as_secs_f64() / SHIMMER_PERIOD.as_secs_f64();
    let chars: Vec<char> = app.config.title.chars().collect();
    let len = chars.len().max(1) as f64;

    let mut spans = vec![Span::raw(format!("{} ", ICON_HEART)).fg(app.theme.accent_colour)];
    spans.extend(chars.iter().enumerate().map(|(i, c)| {
        Span::styled(
            c.to_string(),
            Style::default()
                .fg(app.theme.gradient_at(i as f64 / len - phase))
                .add_modifier(Modifier::BOLD),
        )
    }));
    spans.push(Span::raw(format!(" {}", ICON_HEART)).fg(app.theme.accent_colour));

    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        line,
    );
}

fn draw_reveal_button(f: &mut Frame, area: Rect, app: &App) {
    let label = format!(" {} Click Me {} ", ICON_SPARKLE, ICON_SPARKLE);
    let style = if app.message_visible {
        Style::default().fg(app.theme.accent_colour)
    } else {
        Style::default()
            .fg(app.theme.text_colour)
            .bg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    };

    f.render_widget(
        Paragraph::new(Line::styled(label, style)).alignment(Alignment::Center),
        area,
    );
}

fn draw_message(f: &mut Frame, area: Rect, app: &App) {
    let message = Paragraph::new(app.config.message.as_str())
        .style(Style::default().fg(app.theme.message_colour))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, area);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let help = Line::from("space play/pause \u{00B7} enter surprise \u{00B7} q quit")
        .fg(app.theme.muted_colour);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}
