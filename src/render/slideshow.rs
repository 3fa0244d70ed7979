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

//! The slideshow panel.
//!
//! A terminal cannot show the photo itself, so the panel shows the slide's
//! caption and locator, fading in after each change, with a row of dots
//! marking the position in the set.

use std::{path::Path, time::Duration};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_SLIDE_CURRENT, ICON_SLIDE_OTHER},
    theme::Theme,
};

const FADE_DURATION: Duration = Duration::from_secs(1);

/// Opacity of a slide `elapsed` after it was put on display.
pub(crate) fn fade_in(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() / FADE_DURATION.as_secs_f64()).clamp(0.0, 1.0)
}

pub(crate) fn draw_slideshow(f: &mut Frame, area: Rect, app: &App) {
    let show = &app.slideshow;
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_colour))
        .title(format!(" Memory {} ", show.cursor() + 1))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let opacity = fade_in(show.changed_at().elapsed());
    let caption_colour = Theme::blend(theme.background_colour, theme.text_colour, opacity);
    let locator_colour = Theme::blend(theme.background_colour, theme.muted_colour, opacity);

    let name = Path::new(show.current())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| show.current().to_string());

    let dots: Vec<Span> = (0..show.len())
        .map(|i| {
            if i == show.cursor() {
                Span::raw(format!("{} ", ICON_SLIDE_CURRENT)).fg(theme.accent_colour)
            } else {
                Span::raw(format!("{} ", ICON_SLIDE_OTHER)).fg(theme.muted_colour)
            }
        })
        .collect();

    let lines = vec![
        Line::styled(
            name,
            Style::default()
                .fg(caption_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(show.current().to_string(), Style::default().fg(locator_colour)),
        Line::default(),
        Line::from(dots),
    ];

    let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(inner);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}
