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

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::Widget,
};

use crate::{hearts::Hearts, render::icons::ICON_HEART};

/// Paints each heart at its fractional position within the area, except
/// where the card itself is drawn.
pub(crate) struct HeartsWidget<'a> {
    hearts: &'a Hearts,
    colour: Color,
    card: Rect,
}

impl<'a> HeartsWidget<'a> {
    pub(crate) fn new(hearts: &'a Hearts, colour: Color) -> Self {
        Self {
            hearts,
            colour,
            card: Rect::default(),
        }
    }

    /// Keeps hearts out of `card`.
    pub(crate) fn around(mut self, card: Rect) -> Self {
        self.card = card;
        self
    }
}

impl Widget for HeartsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = Style::default().fg(self.colour);
        for heart in self.hearts.iter() {
            let (x, y) = cell_for(heart.x, heart.y, area);
            if !self.card.contains(Position { x, y }) {
                buf.set_string(x, y, ICON_HEART, style);
            }
        }
    }
}

// Maps fractions in [0, 1] onto a cell inside `area`.
fn cell_for(fx: f64, fy: f64, area: Rect) -> (u16, u16) {
    let x = (fx.clamp(0.0, 1.0) * (area.width - 1) as f64).round() as u16;
    let y = (fy.clamp(0.0, 1.0) * (area.height - 1) as f64).round() as u16;
    (area.x + x, area.y + y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_inside_the_area() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(cell_for(0.0, 0.0, area), (2, 3));
        assert_eq!(cell_for(1.0, 1.0, area), (11, 7));
        assert_eq!(cell_for(2.0, -1.0, area), (11, 3));
    }

    #[test]
    fn no_heart_is_painted_over_the_card() {
        let area = Rect::new(0, 0, 40, 20);
        let card = Rect::new(0, 0, 20, 20);
        let hearts = Hearts::new(200);

        let mut buf = Buffer::empty(area);
        HeartsWidget::new(&hearts, Color::Red)
            .around(card)
            .render(area, &mut buf);

        for y in card.top()..card.bottom() {
            for x in card.left()..card.right() {
                assert_eq!(buf[(x, y)].symbol(), " ", "heart at {},{}", x, y);
            }
        }

        let painted = (0..area.height)
            .flat_map(|y| (20..area.width).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() == ICON_HEART)
            .count();
        assert!(painted > 0);
    }
}
